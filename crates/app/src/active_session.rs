use chrono::NaiveDate;
use tourspec_domain::{
    Coach, EquipmentProfile, Exercise, Feedback, SessionEditor, SessionLog, SessionLogService,
    SetUpdate, WorkoutDay, WriteError,
};

/// Lifecycle of one logging session.
///
/// All mutation happens on a single logical thread in response to
/// discrete user actions, so the states below can only advance through
/// `finish`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Submitting,
    Completed { feedback: Feedback },
}

#[derive(thiserror::Error, Debug)]
pub enum FinishError {
    #[error("a submission is already in progress")]
    SubmissionInProgress,
    #[error("the session has already been completed")]
    AlreadyCompleted,
    #[error(transparent)]
    Persist(#[from] WriteError),
}

/// One workout session being logged, from start to coached completion.
///
/// Wraps the session editor with the finish flow: the finalized log is
/// persisted before the coaching call, and a feedback failure never rolls
/// the persisted session back.
pub struct ActiveSession {
    day: &'static WorkoutDay,
    editor: SessionEditor,
    state: SessionState,
}

impl ActiveSession {
    pub fn start<S: SessionLogService>(day: &'static WorkoutDay, service: &S) -> Self {
        let editor = SessionEditor::start(day, |exercise_id| {
            service.last_log_for_exercise(exercise_id)
        });
        Self {
            day,
            editor,
            state: SessionState::InProgress,
        }
    }

    #[must_use]
    pub fn day(&self) -> &'static WorkoutDay {
        self.day
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn editor(&self) -> &SessionEditor {
        &self.editor
    }

    /// True once the user has entered anything worth a confirmation
    /// before navigating away. Declining the confirmation leaves all
    /// in-progress state intact.
    #[must_use]
    pub fn has_recorded_data(&self) -> bool {
        self.editor.has_recorded_data()
    }

    pub fn update_set(&mut self, exercise_id: &str, set_index: usize, update: SetUpdate) {
        if self.editable() {
            self.editor.update_set(exercise_id, set_index, update);
        }
    }

    pub fn toggle_completed(&mut self, exercise_id: &str, set_index: usize) {
        if self.editable() {
            self.editor.toggle_completed(exercise_id, set_index);
        }
    }

    pub fn add_set(&mut self, exercise_id: &str) {
        if self.editable() {
            self.editor.add_set(exercise_id);
        }
    }

    pub fn remove_set(&mut self, exercise_id: &str) {
        if self.editable() {
            self.editor.remove_set(exercise_id);
        }
    }

    pub fn substitute<S: SessionLogService>(
        &mut self,
        element_index: usize,
        new_exercise: &Exercise,
        service: &S,
    ) {
        if self.editable() {
            self.editor
                .substitute(element_index, new_exercise, |exercise_id| {
                    service.last_log_for_exercise(exercise_id)
                });
        }
    }

    /// Finalizes, persists and analyzes the session.
    ///
    /// Re-submission is rejected while a submission is running or after
    /// completion. A persistence failure restores the in-progress state
    /// so the user can retry; a coaching failure is folded into the
    /// returned [`Feedback`] and still completes the session.
    pub fn finish<S, C>(
        &mut self,
        service: &S,
        coach: &C,
        date: NaiveDate,
        profile: EquipmentProfile,
    ) -> Result<(SessionLog, Feedback), FinishError>
    where
        S: SessionLogService,
        C: Coach,
    {
        match self.state {
            SessionState::InProgress => {}
            SessionState::Submitting => return Err(FinishError::SubmissionInProgress),
            SessionState::Completed { .. } => return Err(FinishError::AlreadyCompleted),
        }
        self.state = SessionState::Submitting;

        let session_log = self.editor.finalize(date, profile);
        if let Err(err) = service.append_session_log(&session_log) {
            self.state = SessionState::InProgress;
            return Err(FinishError::Persist(err));
        }

        let feedback = coach.analyze(&session_log, self.day);
        self.state = SessionState::Completed {
            feedback: feedback.clone(),
        };
        Ok((session_log, feedback))
    }

    fn editable(&self) -> bool {
        self.state == SessionState::InProgress
    }
}
