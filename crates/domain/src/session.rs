use std::fmt::{self, Display};

use chrono::NaiveDate;
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{DayKey, EquipmentProfile, Exercise, PlanElement, ReadError, WorkoutDay, WriteError};

/// Subjective intensity of a single performed set on the 1-4 level scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Effort(u8);

impl Effort {
    pub const ONE: Effort = Effort(1);
    pub const TWO: Effort = Effort(2);
    pub const THREE: Effort = Effort(3);
    pub const FOUR: Effort = Effort(4);

    pub fn new(value: u8) -> Result<Self, EffortError> {
        if !(1..=4).contains(&value) {
            return Err(EffortError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl Default for Effort {
    fn default() -> Self {
        Effort::TWO
    }
}

impl TryFrom<u8> for Effort {
    type Error = EffortError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Effort::new(value)
    }
}

impl TryFrom<&str> for Effort {
    type Error = EffortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u8>() {
            Ok(parsed_value) => Effort::new(parsed_value),
            Err(_) => Err(EffortError::ParseError),
        }
    }
}

impl From<Effort> for u8 {
    fn from(value: Effort) -> Self {
        value.0
    }
}

impl Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EffortError {
    #[error("Effort must be in the range 1 to 4")]
    OutOfRange,
    #[error("Effort must be an integer")]
    ParseError,
}

/// One performed set. Weight and reps are free text to allow entries like
/// "30s" or "6 / side".
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLog {
    pub weight: String,
    pub reps: String,
    pub effort: Effort,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub exercise_id: String,
    pub sets: Vec<SetLog>,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionID(Uuid);

impl SessionID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A finished workout session. Immutable once created; the persisted
/// collection is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    pub id: SessionID,
    pub date: NaiveDate,
    pub profile: EquipmentProfile,
    pub day: DayKey,
    pub exercises: Vec<ExerciseLog>,
}

impl SessionLog {
    #[must_use]
    pub fn exercise_log(&self, exercise_id: &str) -> Option<&ExerciseLog> {
        self.exercises
            .iter()
            .find(|log| log.exercise_id == exercise_id)
    }

    #[must_use]
    pub fn completed_sets(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|log| &log.sets)
            .filter(|set| set.completed)
            .count()
    }
}

pub trait SessionLogRepository {
    fn read_session_logs(&self) -> Result<Vec<SessionLog>, ReadError>;
    fn append_session_log(&self, session_log: &SessionLog) -> Result<(), WriteError>;
}

pub trait SessionLogService {
    /// All persisted sessions, most recently appended first. Read failures
    /// degrade to an empty list so the session flow is never blocked by a
    /// broken store.
    fn session_logs(&self) -> Vec<SessionLog>;
    fn append_session_log(&self, session_log: &SessionLog) -> Result<(), WriteError>;
    fn last_log_for_exercise(&self, exercise_id: &str) -> Option<ExerciseLog>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetUpdate {
    Weight(String),
    Reps(String),
    Effort(Effort),
}

/// In-memory state of one workout session in progress.
///
/// Owns the active element sequence (with any substitutions applied) and
/// one log per non-rest exercise. All mutating operations are silent
/// no-ops on unknown ids or out-of-range indices; the caller is expected
/// to disable the triggering control instead of handling errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEditor {
    day: DayKey,
    elements: Vec<PlanElement>,
    logs: Vec<ExerciseLog>,
    initial: Vec<ExerciseLog>,
}

impl SessionEditor {
    /// Builds the working state for a workout day.
    ///
    /// Every non-rest exercise gets one log whose set count equals its
    /// target set count, with a minimum of one. Sets are pre-filled
    /// positionally from the most recent persisted log for the same
    /// exercise id: set *i* takes the prior session's set *i*, falling
    /// back to that session's first set. The completed flag always starts
    /// out false.
    pub fn start<F>(day: &WorkoutDay, last_log: F) -> Self
    where
        F: Fn(&str) -> Option<ExerciseLog>,
    {
        let elements = day.elements.to_vec();
        let logs = elements
            .iter()
            .filter_map(PlanElement::exercise)
            .map(|exercise| Self::initial_log(exercise, &last_log))
            .collect::<Vec<_>>();
        Self {
            day: day.key,
            elements,
            logs: logs.clone(),
            initial: logs,
        }
    }

    fn initial_log<F>(exercise: &Exercise, last_log: &F) -> ExerciseLog
    where
        F: Fn(&str) -> Option<ExerciseLog>,
    {
        let prior = last_log(exercise.id);
        let sets = (0..exercise.sets.max(1))
            .map(|i| {
                prior
                    .as_ref()
                    .and_then(|log| log.sets.get(i).or_else(|| log.sets.first()))
                    .map_or_else(SetLog::default, |set| SetLog {
                        weight: set.weight.clone(),
                        reps: set.reps.clone(),
                        effort: set.effort,
                        completed: false,
                    })
            })
            .collect::<Vec<_>>();
        ExerciseLog {
            exercise_id: exercise.id.to_string(),
            sets,
        }
    }

    #[must_use]
    pub fn day(&self) -> DayKey {
        self.day
    }

    #[must_use]
    pub fn elements(&self) -> &[PlanElement] {
        &self.elements
    }

    #[must_use]
    pub fn logs(&self) -> &[ExerciseLog] {
        &self.logs
    }

    #[must_use]
    pub fn exercise_log(&self, exercise_id: &str) -> Option<&ExerciseLog> {
        self.logs.iter().find(|log| log.exercise_id == exercise_id)
    }

    pub fn update_set(&mut self, exercise_id: &str, set_index: usize, update: SetUpdate) {
        let Some(set) = self.set_mut(exercise_id, set_index) else {
            return;
        };
        match update {
            SetUpdate::Weight(weight) => set.weight = weight,
            SetUpdate::Reps(reps) => set.reps = reps,
            SetUpdate::Effort(effort) => set.effort = effort,
        }
    }

    pub fn toggle_completed(&mut self, exercise_id: &str, set_index: usize) {
        if let Some(set) = self.set_mut(exercise_id, set_index) {
            set.completed = !set.completed;
        }
    }

    /// Appends one set, copying weight, reps and effort from the current
    /// last set of the exercise.
    pub fn add_set(&mut self, exercise_id: &str) {
        let Some(log) = self.log_mut(exercise_id) else {
            return;
        };
        let set = log.sets.last().map_or_else(SetLog::default, |last| SetLog {
            weight: last.weight.clone(),
            reps: last.reps.clone(),
            effort: last.effort,
            completed: false,
        });
        log.sets.push(set);
    }

    /// Removes the last set unless exactly one remains.
    pub fn remove_set(&mut self, exercise_id: &str) {
        if let Some(log) = self.log_mut(exercise_id) {
            if log.sets.len() > 1 {
                log.sets.pop();
            }
        }
    }

    /// Replaces the exercise at the given sequence position and
    /// re-initializes that exercise's log only. The candidate must come
    /// from the slot's swap options. A rest element, an out-of-range
    /// index, or the incumbent's own id leaves the state untouched.
    pub fn substitute<F>(&mut self, element_index: usize, new_exercise: &Exercise, last_log: F)
    where
        F: Fn(&str) -> Option<ExerciseLog>,
    {
        let old_id = match self.elements.get(element_index) {
            Some(PlanElement::Exercise(exercise)) if exercise.id != new_exercise.id => exercise.id,
            _ => return,
        };
        let Some(position) = self
            .logs
            .iter()
            .position(|log| log.exercise_id == old_id)
        else {
            return;
        };
        let log = Self::initial_log(new_exercise, &last_log);
        self.logs[position] = log.clone();
        self.initial[position] = log;
        self.elements[element_index] = PlanElement::Exercise(new_exercise.clone());
    }

    /// True once the user has changed anything since initialization.
    /// Drives the confirmation step before destructive navigation.
    #[must_use]
    pub fn has_recorded_data(&self) -> bool {
        self.logs != self.initial
    }

    /// Snapshots the current state into an immutable session log with a
    /// fresh id. Persisting and resetting are left to the caller.
    #[must_use]
    pub fn finalize(&self, date: NaiveDate, profile: EquipmentProfile) -> SessionLog {
        SessionLog {
            id: SessionID::random(),
            date,
            profile,
            day: self.day,
            exercises: self.logs.clone(),
        }
    }

    fn log_mut(&mut self, exercise_id: &str) -> Option<&mut ExerciseLog> {
        self.logs
            .iter_mut()
            .find(|log| log.exercise_id == exercise_id)
    }

    fn set_mut(&mut self, exercise_id: &str, set_index: usize) -> Option<&mut SetLog> {
        self.log_mut(exercise_id)
            .and_then(|log| log.sets.get_mut(set_index))
    }
}
