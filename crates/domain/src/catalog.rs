use std::{collections::BTreeMap, fmt, slice::Iter, sync::LazyLock};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Equipment {
    Barbell,
    Bodyweight,
    Cable,
    Dumbbell,
}

impl Equipment {
    pub fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 4] = [
            Equipment::Barbell,
            Equipment::Bodyweight,
            Equipment::Cable,
            Equipment::Dumbbell,
        ];
        EQUIPMENT.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "barbell",
            Equipment::Bodyweight => "bodyweight",
            Equipment::Cable => "cable",
            Equipment::Dumbbell => "dumbbell",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Equipment {
    type Error = EquipmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "barbell" => Ok(Equipment::Barbell),
            "bodyweight" => Ok(Equipment::Bodyweight),
            "cable" => Ok(Equipment::Cable),
            "dumbbell" => Ok(Equipment::Dumbbell),
            _ => Err(EquipmentError::Unknown(value.trim().to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EquipmentError {
    #[error("Unknown equipment \"{0}\" (expected barbell, bodyweight, cable or dumbbell)")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Legs,
    Arms,
    Chest,
    Back,
    Abs,
}

impl MuscleGroup {
    /// Muscle groups in the order they appear in a plan.
    pub fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 5] = [
            MuscleGroup::Legs,
            MuscleGroup::Arms,
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Abs,
        ];
        MUSCLE_GROUPS.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleGroup::Legs => "legs",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Abs => "abs",
        }
    }

    #[must_use]
    pub fn default_sub_group(self) -> SubGroup {
        match self {
            MuscleGroup::Legs => SubGroup::Hamstrings,
            MuscleGroup::Arms => SubGroup::Biceps,
            MuscleGroup::Chest | MuscleGroup::Back => SubGroup::Upper,
            MuscleGroup::Abs => SubGroup::Core,
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum SubGroup {
    Hamstrings,
    Quads,
    Biceps,
    Triceps,
    Upper,
    Lower,
    Core,
}

impl SubGroup {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SubGroup::Hamstrings => "hamstrings",
            SubGroup::Quads => "quads",
            SubGroup::Biceps => "biceps",
            SubGroup::Triceps => "triceps",
            SubGroup::Upper => "upper",
            SubGroup::Lower => "lower",
            SubGroup::Core => "core",
        }
    }
}

impl fmt::Display for SubGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub equipment: Equipment,
    pub muscle_group: MuscleGroup,
    pub sub_group: SubGroup,
}

static EXERCISES: LazyLock<BTreeMap<(MuscleGroup, SubGroup), Vec<Exercise>>> =
    LazyLock::new(|| {
        let mut exercises: BTreeMap<(MuscleGroup, SubGroup), Vec<Exercise>> = BTreeMap::new();
        for exercise in &ENTRIES {
            exercises
                .entry((exercise.muscle_group, exercise.sub_group))
                .or_default()
                .push(*exercise);
        }
        exercises
    });

const ENTRIES: [Exercise; 18] = [
    Exercise {
        name: "Deadlifts",
        equipment: Equipment::Barbell,
        muscle_group: MuscleGroup::Legs,
        sub_group: SubGroup::Hamstrings,
    },
    Exercise {
        name: "Lunges",
        equipment: Equipment::Dumbbell,
        muscle_group: MuscleGroup::Legs,
        sub_group: SubGroup::Hamstrings,
    },
    Exercise {
        name: "Squats",
        equipment: Equipment::Barbell,
        muscle_group: MuscleGroup::Legs,
        sub_group: SubGroup::Quads,
    },
    Exercise {
        name: "Step-ups",
        equipment: Equipment::Bodyweight,
        muscle_group: MuscleGroup::Legs,
        sub_group: SubGroup::Quads,
    },
    Exercise {
        name: "Curls",
        equipment: Equipment::Dumbbell,
        muscle_group: MuscleGroup::Arms,
        sub_group: SubGroup::Biceps,
    },
    Exercise {
        name: "Chin-ups",
        equipment: Equipment::Bodyweight,
        muscle_group: MuscleGroup::Arms,
        sub_group: SubGroup::Biceps,
    },
    Exercise {
        name: "Dips",
        equipment: Equipment::Bodyweight,
        muscle_group: MuscleGroup::Arms,
        sub_group: SubGroup::Triceps,
    },
    Exercise {
        name: "Pushdowns",
        equipment: Equipment::Cable,
        muscle_group: MuscleGroup::Arms,
        sub_group: SubGroup::Triceps,
    },
    Exercise {
        name: "Incline Press",
        equipment: Equipment::Barbell,
        muscle_group: MuscleGroup::Chest,
        sub_group: SubGroup::Upper,
    },
    Exercise {
        name: "Push-ups",
        equipment: Equipment::Bodyweight,
        muscle_group: MuscleGroup::Chest,
        sub_group: SubGroup::Upper,
    },
    Exercise {
        name: "Decline Press",
        equipment: Equipment::Barbell,
        muscle_group: MuscleGroup::Chest,
        sub_group: SubGroup::Lower,
    },
    Exercise {
        name: "Dips",
        equipment: Equipment::Bodyweight,
        muscle_group: MuscleGroup::Chest,
        sub_group: SubGroup::Lower,
    },
    Exercise {
        name: "Pull-ups",
        equipment: Equipment::Bodyweight,
        muscle_group: MuscleGroup::Back,
        sub_group: SubGroup::Upper,
    },
    Exercise {
        name: "Rows",
        equipment: Equipment::Dumbbell,
        muscle_group: MuscleGroup::Back,
        sub_group: SubGroup::Upper,
    },
    Exercise {
        name: "Deadlifts",
        equipment: Equipment::Barbell,
        muscle_group: MuscleGroup::Back,
        sub_group: SubGroup::Lower,
    },
    Exercise {
        name: "Extensions",
        equipment: Equipment::Bodyweight,
        muscle_group: MuscleGroup::Back,
        sub_group: SubGroup::Lower,
    },
    Exercise {
        name: "Planks",
        equipment: Equipment::Bodyweight,
        muscle_group: MuscleGroup::Abs,
        sub_group: SubGroup::Core,
    },
    Exercise {
        name: "Leg Raises",
        equipment: Equipment::Bodyweight,
        muscle_group: MuscleGroup::Abs,
        sub_group: SubGroup::Core,
    },
];

#[must_use]
pub fn exercises(muscle_group: MuscleGroup, sub_group: SubGroup) -> &'static [Exercise] {
    EXERCISES
        .get(&(muscle_group, sub_group))
        .map_or(&[], Vec::as_slice)
}
