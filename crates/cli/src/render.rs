use vigor_domain::{NO_ADVICE, WorkoutPlan, form_cues};

#[must_use]
pub fn plan_text(plan: &WorkoutPlan) -> String {
    let mut text = String::from("\nWarmup:\n");
    for warmup in &plan.warmup {
        text.push_str(&format!("  * {warmup}\n"));
    }
    text.push_str("\nMain Workout:\n");
    for entry in &plan.main {
        text.push_str(&format!(
            "  * {} - {} sets of {} reps\n",
            entry.exercise.name, entry.sets, entry.reps
        ));
    }
    text.push_str("\nStretching:\n");
    for stretch in &plan.stretch {
        text.push_str(&format!("  * {stretch}\n"));
    }
    text
}

#[must_use]
pub fn advice_text(exercise: &str) -> String {
    form_cues(exercise).map_or_else(
        || format!("{NO_ADVICE}\n"),
        |cues| {
            cues.iter()
                .map(|cue| format!("  * {cue}\n"))
                .collect::<String>()
        },
    )
}
