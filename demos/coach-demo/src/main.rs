//! FormVerse coach demo
//!
//! Feeds a scripted bicep-curl landmark sequence through a coaching
//! session and prints the updates, standing in for the webcam pose
//! stream and the external feedback service.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use formverse_catalog::{angle_spec, Catalog, Exercise};
use formverse_core::{FormResult, Joint, Landmark, LandmarkFrame};
use formverse_runtime::{
    CoachSession, CoachingUpdate, ExpertiseLevel, Narration, NarrationRequest, Narrator,
};

/// Stand-in for the external feedback + text-to-speech services:
/// points at the worst deviation after a short artificial delay.
struct TemplateNarrator;

impl Narrator for TemplateNarrator {
    fn narrate(
        &self,
        request: NarrationRequest,
    ) -> Pin<Box<dyn Future<Output = FormResult<Narration>> + Send>> {
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(120)).await;
            let feedback = match worst_deviation(&request.user_angles, &request.canonical_angles) {
                Some((joint, deviation)) if deviation > 25.0 => format!(
                    "Watch your {}: it was {:.0} degrees off target on that {}.",
                    joint, deviation, request.exercise_name
                ),
                Some(_) => format!("Nice {}! Form looked solid.", request.exercise_name),
                None => "Couldn't see enough of you to judge that rep.".to_string(),
            };
            Ok(Narration {
                feedback,
                audio: None,
            })
        })
    }
}

fn worst_deviation(
    user: &BTreeMap<Joint, f32>,
    canonical: &BTreeMap<Joint, f32>,
) -> Option<(Joint, f32)> {
    user.iter()
        .filter_map(|(joint, angle)| {
            canonical
                .get(joint)
                .map(|target| (*joint, (angle - target).abs()))
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
}

/// Pose every relevant joint of the exercise at `degrees`
fn scripted_frame(exercise: &Exercise, degrees: f32) -> LandmarkFrame {
    let mut frame = LandmarkFrame::empty();
    let rad = degrees.to_radians();
    for joint in &exercise.joints {
        let (a, b, c) = angle_spec(*joint).expect("catalog validated");
        frame.set(b, Landmark::new(0.5, 0.5, 0.0, 1.0));
        frame.set(c, Landmark::new(0.7, 0.5, 0.0, 1.0));
        frame.set(
            a,
            Landmark::new(0.5 + 0.2 * rad.cos(), 0.5 + 0.2 * rad.sin(), 0.0, 1.0),
        );
    }
    frame
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let catalog = Catalog::builtin()?;
    println!("Available exercises:");
    for (key, name) in catalog.listing() {
        println!("  {key} - {name}");
    }

    let (mut session, mut updates) = CoachSession::new(
        catalog,
        "bicep_curl",
        ExpertiseLevel::Beginner,
        Arc::new(TemplateNarrator),
    )?;

    // two reps: extended, deep curl, back out, then a sloppy shallow one
    let script = [170.0, 155.0, 90.0, 45.0, 30.0, 90.0, 155.0, 170.0, 58.0, 165.0];
    let exercise = session.exercise().clone();
    for degrees in script {
        session.process_frame(&scripted_frame(&exercise, degrees));
        tokio::time::sleep(Duration::from_millis(33)).await;
    }

    println!("\nSession finished with {} reps", session.rep_count());

    drop(session); // closes the update channel once narration tasks settle
    while let Ok(Some(update)) =
        tokio::time::timeout(Duration::from_secs(1), updates.recv()).await
    {
        match update {
            CoachingUpdate::Contraction {
                exercise_key,
                deviations,
            } => {
                println!("[{exercise_key}] contraction:");
                for (joint, ok) in deviations.iter() {
                    println!("  {joint}: {}", if ok { "good" } else { "off target" });
                }
            }
            CoachingUpdate::RepCompleted(count) => println!("rep #{count}"),
            CoachingUpdate::Narration { feedback, .. } => println!("coach: {feedback}"),
        }
    }

    Ok(())
}
