use crate::{DayKey, EquipmentProfile};

/// Immutable catalog entry describing one prescribed movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub slot: &'static str,
    pub name: &'static str,
    pub sets: usize,
    pub reps: &'static str,
    pub tempo: &'static str,
    pub notes: &'static str,
    pub weight_guide: &'static str,
    pub bias: TrainingBias,
}

/// Training emphasis of a catalog entry, authored on the data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingBias {
    Load,
    Speed,
    Mobility,
    Conditioning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanElement {
    Exercise(Exercise),
    Rest { seconds: u32 },
}

impl PlanElement {
    #[must_use]
    pub fn exercise(&self) -> Option<&Exercise> {
        match self {
            PlanElement::Exercise(exercise) => Some(exercise),
            PlanElement::Rest { .. } => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct WorkoutDay {
    pub key: DayKey,
    pub title: &'static str,
    pub focus: &'static str,
    pub elements: &'static [PlanElement],
}

impl WorkoutDay {
    pub fn exercises(&self) -> impl Iterator<Item = &'static Exercise> {
        self.elements.iter().filter_map(PlanElement::exercise)
    }

    #[must_use]
    pub fn exercise_in_slot(&self, slot: &str) -> Option<&'static Exercise> {
        self.exercises().find(|exercise| exercise.slot == slot)
    }

    #[must_use]
    pub fn num_exercises(&self) -> usize {
        self.exercises().count()
    }
}

/// The workout scheduled for the given equipment profile and day key.
#[must_use]
pub fn workout(profile: EquipmentProfile, day: DayKey) -> Option<&'static WorkoutDay> {
    Some(match (profile, day) {
        (EquipmentProfile::V1, DayKey::Monday) => &V1_MONDAY,
        (EquipmentProfile::V2, DayKey::Monday) => &V2_MONDAY,
        (EquipmentProfile::V1, DayKey::Wednesday) => &V1_WEDNESDAY,
        (EquipmentProfile::V2, DayKey::Wednesday) => &V2_WEDNESDAY,
        (EquipmentProfile::V1, DayKey::Friday) => &V1_FRIDAY,
        (EquipmentProfile::V2, DayKey::Friday) => &V2_FRIDAY,
        (EquipmentProfile::V1, DayKey::Saturday) => &V1_SATURDAY,
        (EquipmentProfile::V2, DayKey::Saturday) => &V2_SATURDAY,
    })
}

/// Authored alternates for one slot of one day.
#[derive(Debug, PartialEq, Eq)]
pub struct Substitution {
    pub day: DayKey,
    pub slot: &'static str,
    pub alternates: &'static [Exercise],
}

#[must_use]
pub fn substitutes(day: DayKey, slot: &str) -> &'static [Exercise] {
    SUBSTITUTIONS
        .iter()
        .find(|substitution| substitution.day == day && substitution.slot == slot)
        .map_or(&[], |substitution| substitution.alternates)
}

/// All exercises the incumbent of a slot can be swapped to.
///
/// Candidates are the slot's exercise in each equipment profile plus the
/// authored alternates, deduplicated by id, with the incumbent removed. An
/// empty result means the swap control must be disabled.
#[must_use]
pub fn swap_options(day: DayKey, slot: &str, current_id: &str) -> Vec<&'static Exercise> {
    let mut options: Vec<&'static Exercise> = Vec::new();
    let mut add = |exercise: &'static Exercise| {
        if exercise.id != current_id && options.iter().all(|option| option.id != exercise.id) {
            options.push(exercise);
        }
    };
    for profile in EquipmentProfile::ALL {
        if let Some(exercise) = workout(profile, day).and_then(|w| w.exercise_in_slot(slot)) {
            add(exercise);
        }
    }
    for exercise in substitutes(day, slot) {
        add(exercise);
    }
    options
}

const fn rest(seconds: u32) -> PlanElement {
    PlanElement::Rest { seconds }
}

const HIP_SWITCH: PlanElement = PlanElement::Exercise(Exercise {
    id: "90-90-hip-switch",
    slot: "FINISHER",
    name: "90/90 Hip Switch",
    sets: 2,
    reps: "10 / side",
    tempo: "Smooth",
    notes: "No hands if possible. Flosses the hip capsule.",
    weight_guide: "Body",
    bias: TrainingBias::Mobility,
});

static V1_MONDAY: WorkoutDay = WorkoutDay {
    key: DayKey::Monday,
    title: "Push + T-Spine",
    focus: "Strength & Rotation",
    elements: &[
        PlanElement::Exercise(Exercise {
            id: "smith-machine-bench-press",
            slot: "1A",
            name: "Smith-Machine Bench Press",
            sets: 3,
            reps: "8",
            tempo: "3-0-X",
            notes: "Control bar down to nipple line (3s). Drive up fast.",
            weight_guide: "50-60 kg",
            bias: TrainingBias::Load,
        }),
        PlanElement::Exercise(Exercise {
            id: "bench-t-spine-rotation",
            slot: "1B",
            name: "Bench T-Spine Rotation",
            sets: 3,
            reps: "6 / side",
            tempo: "2-1-2",
            notes: "Active Rest. Keep hips square. Exhale as you rotate arm to ceiling.",
            weight_guide: "Body",
            bias: TrainingBias::Mobility,
        }),
        rest(90),
        PlanElement::Exercise(Exercise {
            id: "med-ball-rotational-throw",
            slot: "2A",
            name: "Med-Ball Rotational Throw",
            sets: 3,
            reps: "6 / side",
            tempo: "X-X-X",
            notes: "Tall-kneeling. MAX velocity. Reset between reps.",
            weight_guide: "4 kg",
            bias: TrainingBias::Speed,
        }),
        PlanElement::Exercise(Exercise {
            id: "standing-face-pull",
            slot: "2B",
            name: "Standing Face Pull",
            sets: 3,
            reps: "15",
            tempo: "1-1-2",
            notes: "Pull rope to forehead. Squeeze rear delts for 1s.",
            weight_guide: "25 kg",
            bias: TrainingBias::Load,
        }),
        rest(90),
        PlanElement::Exercise(Exercise {
            id: "half-kneel-cable-lift",
            slot: "3A",
            name: "Half-Kneel Cable Lift",
            sets: 3,
            reps: "10 / side",
            tempo: "2-0-1",
            notes: "Low-to-High diagonal. Follow hands with eyes.",
            weight_guide: "12.5 kg",
            bias: TrainingBias::Load,
        }),
        PlanElement::Exercise(Exercise {
            id: "pallof-press-iso",
            slot: "3B",
            name: "Pallof Press (ISO)",
            sets: 3,
            reps: "30s / side",
            tempo: "ISO",
            notes: "Hold handle at chest center. Brace abs hard.",
            weight_guide: "12.5 kg",
            bias: TrainingBias::Load,
        }),
        HIP_SWITCH,
    ],
};

static V2_MONDAY: WorkoutDay = WorkoutDay {
    key: DayKey::Monday,
    title: "Push + T-Spine (Limited)",
    focus: "Strength & Rotation",
    elements: &[
        PlanElement::Exercise(Exercise {
            id: "machine-chest-press",
            slot: "1A",
            name: "Machine Chest Press",
            sets: 3,
            reps: "8",
            tempo: "3-0-X",
            notes: "Control eccentric (3s). Drive out fast.",
            weight_guide: "[MS]",
            bias: TrainingBias::Load,
        }),
        PlanElement::Exercise(Exercise {
            id: "db-bench-t-spine-rotation",
            slot: "1B",
            name: "DB Bench T-Spine Rotation",
            sets: 3,
            reps: "6 / side",
            tempo: "2-1-2",
            notes: "Lie on bench, hold 1 DB straight up.",
            weight_guide: "[DB]",
            bias: TrainingBias::Mobility,
        }),
        rest(90),
        PlanElement::Exercise(Exercise {
            id: "cable-rotational-chop",
            slot: "2A",
            name: "Cable Rotational Chop",
            sets: 3,
            reps: "8 / side",
            tempo: "X-1-X",
            notes: "Set cable at chest height. Explode.",
            weight_guide: "[FT]",
            bias: TrainingBias::Speed,
        }),
        PlanElement::Exercise(Exercise {
            id: "cable-face-pull",
            slot: "2B",
            name: "Cable Face Pull",
            sets: 3,
            reps: "15",
            tempo: "1-1-2",
            notes: "Use rope attachment on high pulley.",
            weight_guide: "[FT]",
            bias: TrainingBias::Load,
        }),
        rest(90),
        PlanElement::Exercise(Exercise {
            id: "half-kneel-cable-lift-ft",
            slot: "3A",
            name: "Half-Kneel Cable Lift",
            sets: 3,
            reps: "10 / side",
            tempo: "2-0-1",
            notes: "Low pulley. Lift diagonally up.",
            weight_guide: "[FT]",
            bias: TrainingBias::Load,
        }),
        PlanElement::Exercise(Exercise {
            id: "pallof-press-iso-ft",
            slot: "3B",
            name: "Pallof Press (ISO)",
            sets: 3,
            reps: "30s / side",
            tempo: "ISO",
            notes: "Chest-height pulley. Anti-rotation.",
            weight_guide: "[FT]",
            bias: TrainingBias::Load,
        }),
        HIP_SWITCH,
    ],
};

static WEDNESDAY_ELEMENTS: [PlanElement; 9] = [
    PlanElement::Exercise(Exercise {
        id: "rear-foot-split-squat",
        slot: "1A",
        name: "Rear-Foot Split Squat",
        sets: 3,
        reps: "8 / leg",
        tempo: "3-1-X",
        notes: "Drive through front heel. Keep torso upright.",
        weight_guide: "15 kg (DBs)",
        bias: TrainingBias::Load,
    }),
    PlanElement::Exercise(Exercise {
        id: "hip-cars-standing",
        slot: "1B",
        name: "Hip CARs (Standing)",
        sets: 3,
        reps: "3 / side",
        tempo: "5-0-5",
        notes: "Very Slow, controlled circles.",
        weight_guide: "Body",
        bias: TrainingBias::Mobility,
    }),
    rest(90),
    PlanElement::Exercise(Exercise {
        id: "lateral-skater-bounds",
        slot: "2A",
        name: "Lateral Skater Bounds",
        sets: 3,
        reps: "6 / side",
        tempo: "X-1-X",
        notes: "Jump sideways. Land softly and stick balance.",
        weight_guide: "Body",
        bias: TrainingBias::Speed,
    }),
    PlanElement::Exercise(Exercise {
        id: "kb-wood-chop-diagonal",
        slot: "2B",
        name: "KB Wood-Chop (Diagonal)",
        sets: 3,
        reps: "10 / side",
        tempo: "X-0-1",
        notes: "High-to-Low diagonal. Simulate downswing crunch.",
        weight_guide: "15 kg",
        bias: TrainingBias::Speed,
    }),
    rest(90),
    PlanElement::Exercise(Exercise {
        id: "seated-cable-row",
        slot: "3A",
        name: "Seated Cable Row",
        sets: 3,
        reps: "10",
        tempo: "2-1-1",
        notes: "Retract scapula fully. Pause at chest for 1s.",
        weight_guide: "45-50 kg",
        bias: TrainingBias::Load,
    }),
    PlanElement::Exercise(Exercise {
        id: "cossack-squat",
        slot: "3B",
        name: "Cossack Squat",
        sets: 3,
        reps: "6 / side",
        tempo: "2-0-1",
        notes: "Keep straight-leg heel on ground.",
        weight_guide: "Body / 8kg",
        bias: TrainingBias::Mobility,
    }),
    PlanElement::Exercise(Exercise {
        id: "single-arm-carry",
        slot: "FINISHER",
        name: "Single-Arm Carry",
        sets: 3,
        reps: "30m / side",
        tempo: "Walk",
        notes: "Hold heavy KB in one hand. Walk straight.",
        weight_guide: "20-24 kg",
        bias: TrainingBias::Load,
    }),
];

static V1_WEDNESDAY: WorkoutDay = WorkoutDay {
    key: DayKey::Wednesday,
    title: "Legs + Ground Force",
    focus: "Stability & Power",
    elements: &WEDNESDAY_ELEMENTS,
};

// The limited rig runs the same table with machine-free loading.
static V2_WEDNESDAY: WorkoutDay = WorkoutDay {
    key: DayKey::Wednesday,
    title: "Legs + Ground Force (Limited)",
    focus: "Stability & Power",
    elements: &WEDNESDAY_ELEMENTS,
};

static FRIDAY_ELEMENTS: [PlanElement; 9] = [
    PlanElement::Exercise(Exercise {
        id: "db-romanian-deadlift",
        slot: "1A",
        name: "DB Romanian Deadlift (RDL)",
        sets: 3,
        reps: "10",
        tempo: "3-1-1",
        notes: "Push hips back until hamstrings stretch (3s).",
        weight_guide: "20-24 kg",
        bias: TrainingBias::Load,
    }),
    PlanElement::Exercise(Exercise {
        id: "cat-cow",
        slot: "1B",
        name: "Cat-Cow Mobility",
        sets: 3,
        reps: "8",
        tempo: "2-2-2",
        notes: "Full flexion/extension of spine.",
        weight_guide: "Body",
        bias: TrainingBias::Mobility,
    }),
    rest(90),
    PlanElement::Exercise(Exercise {
        id: "cable-resisted-rotation",
        slot: "2A",
        name: "Cable Resisted Rotation",
        sets: 3,
        reps: "10 / side",
        tempo: "2-0-X",
        notes: "Rotate out fast, resist slowly back.",
        weight_guide: "12.5 kg",
        bias: TrainingBias::Speed,
    }),
    PlanElement::Exercise(Exercise {
        id: "cable-fly",
        slot: "2B",
        name: "Cable Fly",
        sets: 3,
        reps: "12",
        tempo: "2-1-1",
        notes: "Step forward. Stretch chest fully.",
        weight_guide: "10-15 kg",
        bias: TrainingBias::Load,
    }),
    rest(90),
    PlanElement::Exercise(Exercise {
        id: "pallof-press-step-out",
        slot: "3A",
        name: "Pallof Press + Step Out",
        sets: 3,
        reps: "8 / side",
        tempo: "Control",
        notes: "Press hands out, take a lateral step.",
        weight_guide: "12.5 kg",
        bias: TrainingBias::Load,
    }),
    PlanElement::Exercise(Exercise {
        id: "bodyweight-sissy-squat",
        slot: "3B",
        name: "Bodyweight Sissy Squat",
        sets: 3,
        reps: "10",
        tempo: "3-0-1",
        notes: "Lean back slow (3s), knees over toes.",
        weight_guide: "Body",
        bias: TrainingBias::Load,
    }),
    PlanElement::Exercise(Exercise {
        id: "cable-reverse-fly",
        slot: "FINISHER",
        name: "Cable Reverse Fly",
        sets: 3,
        reps: "15",
        tempo: "1-1-1",
        notes: "Set cables high. Cross arms and pull apart.",
        weight_guide: "Light",
        bias: TrainingBias::Load,
    }),
];

static V1_FRIDAY: WorkoutDay = WorkoutDay {
    key: DayKey::Friday,
    title: "Posterior Chain",
    focus: "The Engine",
    elements: &FRIDAY_ELEMENTS,
};

static V2_FRIDAY: WorkoutDay = WorkoutDay {
    key: DayKey::Friday,
    title: "Posterior Chain (Limited)",
    focus: "The Engine",
    elements: &FRIDAY_ELEMENTS,
};

static SATURDAY_ELEMENTS: [PlanElement; 5] = [
    PlanElement::Exercise(Exercise {
        id: "walk-drills",
        slot: "Warm Up",
        name: "Walk + Drills",
        sets: 1,
        reps: "5 min",
        tempo: "Easy",
        notes: "Prepare the body.",
        weight_guide: "-",
        bias: TrainingBias::Conditioning,
    }),
    PlanElement::Exercise(Exercise {
        id: "10k-pace-interval-1",
        slot: "Interval 1",
        name: "10k Pace Interval",
        sets: 1,
        reps: "10 min",
        tempo: "6:15/km",
        notes: "Steady pace.",
        weight_guide: "-",
        bias: TrainingBias::Conditioning,
    }),
    PlanElement::Exercise(Exercise {
        id: "recovery-walk",
        slot: "Recovery",
        name: "Walk",
        sets: 1,
        reps: "2 min",
        tempo: "Walk",
        notes: "Active recovery.",
        weight_guide: "-",
        bias: TrainingBias::Conditioning,
    }),
    PlanElement::Exercise(Exercise {
        id: "10k-pace-interval-2",
        slot: "Interval 2",
        name: "10k Pace Interval",
        sets: 1,
        reps: "10 min",
        tempo: "6:15/km",
        notes: "Steady pace.",
        weight_guide: "-",
        bias: TrainingBias::Conditioning,
    }),
    PlanElement::Exercise(Exercise {
        id: "cool-down-walk",
        slot: "Cool Down",
        name: "Walk",
        sets: 1,
        reps: "5 min",
        tempo: "Easy",
        notes: "Cool down.",
        weight_guide: "-",
        bias: TrainingBias::Conditioning,
    }),
];

static V1_SATURDAY: WorkoutDay = WorkoutDay {
    key: DayKey::Saturday,
    title: "10k Pace Strategy",
    focus: "Cardio",
    elements: &SATURDAY_ELEMENTS,
};

static V2_SATURDAY: WorkoutDay = WorkoutDay {
    key: DayKey::Saturday,
    title: "10k Pace Strategy",
    focus: "Cardio",
    elements: &SATURDAY_ELEMENTS,
};

static SUBSTITUTIONS: [Substitution; 6] = [
    Substitution {
        day: DayKey::Monday,
        slot: "1A",
        alternates: &[
            Exercise {
                id: "db-bench-press",
                slot: "1A",
                name: "DB Bench Press",
                sets: 3,
                reps: "8",
                tempo: "3-0-X",
                notes: "Press dumbbells from chest level. Elbows at 45 degrees.",
                weight_guide: "22-26 kg (DBs)",
                bias: TrainingBias::Load,
            },
            Exercise {
                id: "deficit-push-up",
                slot: "1A",
                name: "Deficit Push-Up",
                sets: 3,
                reps: "12",
                tempo: "3-0-X",
                notes: "Hands on low blocks. Chest below hand level at the bottom.",
                weight_guide: "Body",
                bias: TrainingBias::Load,
            },
        ],
    },
    Substitution {
        day: DayKey::Monday,
        slot: "2B",
        alternates: &[Exercise {
            id: "band-pull-apart",
            slot: "2B",
            name: "Band Pull Apart",
            sets: 3,
            reps: "15",
            tempo: "1-1-2",
            notes: "Arms straight. Pull band to chest line.",
            weight_guide: "Light band",
            bias: TrainingBias::Load,
        }],
    },
    Substitution {
        day: DayKey::Wednesday,
        slot: "1A",
        alternates: &[
            Exercise {
                id: "goblet-squat",
                slot: "1A",
                name: "Goblet Squat",
                sets: 3,
                reps: "8",
                tempo: "3-1-X",
                notes: "Hold one DB at chest. Sit between the hips.",
                weight_guide: "16-20 kg",
                bias: TrainingBias::Load,
            },
            Exercise {
                id: "db-step-up",
                slot: "1A",
                name: "DB Step-Up",
                sets: 3,
                reps: "8 / leg",
                tempo: "2-0-X",
                notes: "Full foot on box. Drive through the heel.",
                weight_guide: "12-16 kg (DBs)",
                bias: TrainingBias::Load,
            },
        ],
    },
    Substitution {
        day: DayKey::Wednesday,
        slot: "3A",
        alternates: &[Exercise {
            id: "single-arm-db-row",
            slot: "3A",
            name: "Single-Arm DB Row",
            sets: 3,
            reps: "10 / side",
            tempo: "2-1-1",
            notes: "Knee and hand on bench. Pull elbow to hip.",
            weight_guide: "20-24 kg",
            bias: TrainingBias::Load,
        }],
    },
    Substitution {
        day: DayKey::Friday,
        slot: "1A",
        alternates: &[
            Exercise {
                id: "barbell-rdl",
                slot: "1A",
                name: "Barbell RDL",
                sets: 3,
                reps: "10",
                tempo: "3-1-1",
                notes: "Bar stays against thighs. Hips drive back.",
                weight_guide: "40-50 kg",
                bias: TrainingBias::Load,
            },
            Exercise {
                id: "single-leg-db-rdl",
                slot: "1A",
                name: "Single-Leg DB RDL",
                sets: 3,
                reps: "8 / leg",
                tempo: "3-1-1",
                notes: "Square hips. Reach the free leg long behind.",
                weight_guide: "12-16 kg",
                bias: TrainingBias::Load,
            },
        ],
    },
    Substitution {
        day: DayKey::Friday,
        slot: "2B",
        alternates: &[Exercise {
            id: "db-fly",
            slot: "2B",
            name: "DB Fly",
            sets: 3,
            reps: "12",
            tempo: "2-1-1",
            notes: "Slight elbow bend. Stretch chest at the bottom.",
            weight_guide: "8-12 kg (DBs)",
            bias: TrainingBias::Load,
        }],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_workout_present_for_all_profiles_and_days() {
        for profile in EquipmentProfile::ALL {
            for day in DayKey::ALL {
                let workout_day = workout(profile, day);
                assert!(workout_day.is_some(), "{profile} {day}");
                assert_eq!(workout_day.unwrap().key, day);
            }
        }
    }

    #[test]
    fn test_v1_monday_contents() {
        let day = workout(EquipmentProfile::V1, DayKey::Monday).unwrap();
        assert_eq!(day.title, "Push + T-Spine");
        assert_eq!(day.focus, "Strength & Rotation");
        assert_eq!(day.num_exercises(), 7);
        assert_eq!(
            day.exercises().map(|e| e.name).collect::<Vec<_>>(),
            vec![
                "Smith-Machine Bench Press",
                "Bench T-Spine Rotation",
                "Med-Ball Rotational Throw",
                "Standing Face Pull",
                "Half-Kneel Cable Lift",
                "Pallof Press (ISO)",
                "90/90 Hip Switch",
            ]
        );
    }

    #[test]
    fn test_v2_falls_back_to_shared_tables() {
        let v1 = workout(EquipmentProfile::V1, DayKey::Wednesday).unwrap();
        let v2 = workout(EquipmentProfile::V2, DayKey::Wednesday).unwrap();
        assert_eq!(v2.title, "Legs + Ground Force (Limited)");
        assert_eq!(v1.elements, v2.elements);
    }

    #[test]
    fn test_exercise_ids_unique_within_each_day() {
        for profile in EquipmentProfile::ALL {
            for day in DayKey::ALL {
                let workout_day = workout(profile, day).unwrap();
                let ids = workout_day.exercises().map(|e| e.id).collect::<Vec<_>>();
                let distinct = ids.iter().copied().collect::<BTreeSet<_>>();
                assert_eq!(ids.len(), distinct.len(), "{profile} {day}");
            }
        }
    }

    #[test]
    fn test_substitution_slots_exist_in_catalog() {
        for substitution in &SUBSTITUTIONS {
            let day = workout(EquipmentProfile::V1, substitution.day).unwrap();
            assert!(
                day.exercise_in_slot(substitution.slot).is_some(),
                "{} {}",
                substitution.day,
                substitution.slot
            );
            for alternate in substitution.alternates {
                assert_eq!(alternate.slot, substitution.slot);
            }
        }
    }

    #[rstest]
    #[case(DayKey::Monday, "2B", &["cable-face-pull", "band-pull-apart"])]
    #[case(DayKey::Friday, "2B", &["db-fly"])]
    fn test_swap_options(
        #[case] day: DayKey,
        #[case] slot: &str,
        #[case] expected: &[&str],
    ) {
        let current = workout(EquipmentProfile::V1, day)
            .unwrap()
            .exercise_in_slot(slot)
            .unwrap();
        assert_eq!(
            swap_options(day, slot, current.id)
                .iter()
                .map(|e| e.id)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_swap_options_deduplicates_shared_entries() {
        // V1 and V2 Wednesday share one table, so the profile variants
        // collapse and only the authored alternates remain.
        let options = swap_options(DayKey::Wednesday, "1A", "rear-foot-split-squat");
        assert_eq!(
            options.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec!["goblet-squat", "db-step-up"]
        );
    }

    #[test]
    fn test_swap_options_empty_when_no_alternates() {
        // The Monday finisher is identical in both profiles and has no
        // authored alternates.
        assert_eq!(swap_options(DayKey::Monday, "FINISHER", "90-90-hip-switch"), Vec::<&Exercise>::new());
    }

    #[test]
    fn test_swap_options_includes_other_profile_variant() {
        let options = swap_options(DayKey::Monday, "1A", "smith-machine-bench-press");
        assert_eq!(
            options.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec!["machine-chest-press", "db-bench-press", "deficit-push-up"]
        );
    }

    #[test]
    fn test_exercise_in_slot_unknown() {
        let day = workout(EquipmentProfile::V1, DayKey::Monday).unwrap();
        assert_eq!(day.exercise_in_slot("9Z"), None);
    }
}
