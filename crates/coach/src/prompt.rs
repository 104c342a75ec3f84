use serde::Serialize;
use tourspec_domain::{SessionLog, WorkoutDay};

#[derive(Serialize)]
struct ExerciseTarget<'a> {
    name: &'a str,
    #[serde(rename = "targetWeight")]
    target_weight: &'a str,
    tempo: &'a str,
}

/// Single natural-language prompt embedding the logged data and the
/// reference targets of the completed workout.
pub(crate) fn build(session_log: &SessionLog, reference: &WorkoutDay) -> String {
    let targets = reference
        .exercises()
        .map(|exercise| ExerciseTarget {
            name: exercise.name,
            target_weight: exercise.weight_guide,
            tempo: exercise.tempo,
        })
        .collect::<Vec<_>>();
    let logged = serde_json::to_string_pretty(&session_log.exercises).unwrap_or_default();
    let targets = serde_json::to_string_pretty(&targets).unwrap_or_default();

    format!(
        "You are an expert TPI-certified Golf Fitness Instructor.\n\
         The user just completed the \"{title}\" workout from the Tour Spec Protocols.\n\
         \n\
         Here is their log data:\n\
         {logged}\n\
         \n\
         The intended protocol details (targets):\n\
         {targets}\n\
         \n\
         Please provide brief, high-impact feedback (max 100 words).\n\
         1. Praise effort on completed heavy lifts.\n\
         2. Point out one area to focus on tempo or form for next time based on the exercise type.\n\
         3. Give a specific \"Swing Thought\" relating this gym work to their golf swing.\n\
         \n\
         Keep the tone encouraging but professional.",
        title = reference.title,
    )
}
