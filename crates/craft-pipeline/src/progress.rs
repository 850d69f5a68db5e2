use craft_core::CraftStep;

/// Progress notifications emitted while an idea is generated or hydrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Status(String),
    /// Emitted once per step, in index order, whether or not an image was produced.
    StepHydrated { index: usize, step: CraftStep },
}

/// Receives pipeline progress synchronously between network calls.
pub trait ProgressSink {
    fn status(&mut self, _message: &str) {}

    fn step_hydrated(&mut self, _index: usize, _step: &CraftStep) {}
}

/// Sink that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}

impl<F> ProgressSink for F
where
    F: FnMut(ProgressEvent),
{
    fn status(&mut self, message: &str) {
        self(ProgressEvent::Status(message.to_string()));
    }

    fn step_hydrated(&mut self, index: usize, step: &CraftStep) {
        self(ProgressEvent::StepHydrated {
            index,
            step: step.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_receive_events() {
        let mut events = Vec::new();
        {
            let mut sink = |event: ProgressEvent| events.push(event);
            sink.status("working");
            sink.step_hydrated(2, &CraftStep::new("Glue", "glue"));
        }
        assert_eq!(
            events,
            vec![
                ProgressEvent::Status("working".to_string()),
                ProgressEvent::StepHydrated {
                    index: 2,
                    step: CraftStep::new("Glue", "glue"),
                },
            ]
        );
    }
}
