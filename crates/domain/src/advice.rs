use std::{collections::BTreeMap, sync::LazyLock};

pub const NO_ADVICE: &str = "No specific advice available.";

pub const GENERAL_TIPS: &[&str] = &[
    "Ensure proper hydration and nutrition.",
    "Sleep well to aid recovery.",
];

static FORM_CUES: LazyLock<BTreeMap<&'static str, &'static [&'static str]>> = LazyLock::new(|| {
    BTreeMap::from([
        (
            "Squats",
            &[
                "Keep your knees behind your toes",
                "Use proper form to avoid injury",
            ][..],
        ),
        (
            "Deadlifts",
            &[
                "Lift with your legs, not your back",
                "Keep your back straight during the movement",
            ][..],
        ),
        (
            "Lunges",
            &[
                "Step forward with a controlled movement",
                "Keep your torso upright",
                "Ensure your knee doesn't extend past your toes",
            ][..],
        ),
        (
            "Step-ups",
            &[
                "Step onto a bench with your entire foot",
                "Keep your chest upright",
                "Engage your glutes and quads",
            ][..],
        ),
        (
            "Curls",
            &[
                "Keep your elbows close to your torso",
                "Control the movement throughout",
                "Don't swing the dumbbell",
            ][..],
        ),
        (
            "Chin-ups",
            &[
                "Pull yourself up by engaging your lats",
                "Keep your body straight",
                "Don't use momentum to complete the lift",
            ][..],
        ),
        (
            "Dips",
            &[
                "Keep your elbows at a 90-degree angle",
                "Don't let your shoulders roll forward",
                "Engage your chest and triceps",
            ][..],
        ),
        (
            "Pushdowns",
            &[
                "Maintain a slight bend in your elbows",
                "Don't use your back to push the weight down",
                "Engage your triceps fully",
            ][..],
        ),
        (
            "Incline Press",
            &[
                "Keep your feet flat on the ground",
                "Don't arch your back",
                "Control the barbell during the descent",
            ][..],
        ),
        (
            "Push-ups",
            &[
                "Engage your core",
                "Keep your body in a straight line",
                "Don't let your elbows flare out too much",
            ][..],
        ),
        (
            "Decline Press",
            &[
                "Ensure a controlled movement throughout",
                "Keep your feet firmly planted",
                "Focus on engaging your lower chest",
            ][..],
        ),
        (
            "Pull-ups",
            &[
                "Pull your chest up to the bar",
                "Keep your body still",
                "Avoid swinging during the movement",
            ][..],
        ),
        (
            "Rows",
            &[
                "Pull with your back, not your arms",
                "Keep your shoulders back and down",
                "Squeeze your shoulder blades together at the top",
            ][..],
        ),
        (
            "Extensions",
            &[
                "Maintain a neutral spine",
                "Don't arch your back",
                "Ensure your glutes are engaged during the lift",
            ][..],
        ),
        (
            "Planks",
            &[
                "Keep your body in a straight line",
                "Engage your core",
                "Avoid letting your hips sag",
            ][..],
        ),
        (
            "Leg Raises",
            &[
                "Lift your legs using your core",
                "Don't let your lower back come off the ground",
                "Control the movement both up and down",
            ][..],
        ),
        (
            "Yoga",
            &[
                "Start with a single pose and progressively increase the duration",
                "Keep your body relaxed and centered",
            ][..],
        ),
        (
            "Stretching",
            &[
                "Start with a full stretch and progressively increase the duration",
                "Keep your body relaxed and centered",
            ][..],
        ),
        (
            "Swimming",
            &[
                "Start with a full swim and progressively increase the duration",
                "Keep your body relaxed and centered",
            ][..],
        ),
        (
            "Cycling",
            &[
                "Start with a full cycle and progressively increase the duration",
                "Keep your body relaxed and centered",
            ][..],
        ),
        (
            "Running",
            &[
                "Start with a full run and progressively increase the duration",
                "Keep your body relaxed and centered",
            ][..],
        ),
    ])
});

#[must_use]
pub fn form_cues(exercise: &str) -> Option<&'static [&'static str]> {
    FORM_CUES.get(exercise.trim()).copied()
}
