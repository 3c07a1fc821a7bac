use async_trait::async_trait;
use screen_flow::{FlowError, Screen, ScreenActor};

// --- Test Screen ---

#[derive(Debug, PartialEq)]
struct StepperScreen {
    label: String,
    count: u32,
}

#[derive(Debug)]
enum StepperEvent {
    Increase,
    Decrease,
}

#[derive(Debug)]
enum StepperCommand {
    Commit,
}

#[derive(Debug, Clone, PartialEq)]
struct StepperView {
    label: String,
    count: u32,
}

#[derive(Debug, thiserror::Error)]
enum StepperError {
    #[error("nothing to commit")]
    Empty,
}

#[async_trait]
impl Screen for StepperScreen {
    type Params = String;
    type Event = StepperEvent;
    type Command = StepperCommand;
    type Outcome = u32;
    type View = StepperView;
    type Context = ();
    type Error = StepperError;

    fn mount(label: String) -> Self {
        Self { label, count: 0 }
    }

    async fn on_event(&mut self, event: StepperEvent, _ctx: &()) -> Result<(), StepperError> {
        match event {
            StepperEvent::Increase => self.count += 1,
            StepperEvent::Decrease => self.count = self.count.saturating_sub(1),
        }
        Ok(())
    }

    async fn on_command(&mut self, command: StepperCommand, _ctx: &()) -> Result<u32, StepperError> {
        match command {
            StepperCommand::Commit => {
                if self.count == 0 {
                    Err(StepperError::Empty)
                } else {
                    Ok(self.count)
                }
            }
        }
    }

    fn view(&self) -> StepperView {
        StepperView {
            label: self.label.clone(),
            count: self.count,
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_screen_full_lifecycle() {
    // Mount
    let (actor, client) = ScreenActor::<StepperScreen>::mount("drinks".into(), 10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Initial view reflects the mount params
    let view = client.view().await.unwrap();
    assert_eq!(view.label, "drinks");
    assert_eq!(view.count, 0);

    // 2. Events answer with the refreshed view
    let view = client.dispatch(StepperEvent::Increase).await.unwrap();
    assert_eq!(view.count, 1);
    let view = client.dispatch(StepperEvent::Increase).await.unwrap();
    assert_eq!(view.count, 2);
    let view = client.dispatch(StepperEvent::Decrease).await.unwrap();
    assert_eq!(view.count, 1);

    // 3. Command returns its outcome
    let committed = client.command(StepperCommand::Commit).await.unwrap();
    assert_eq!(committed, 1);

    // 4. Dropping the last client unmounts the screen
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_screen_error_is_boxed_into_flow_error() {
    let (actor, client) = ScreenActor::<StepperScreen>::mount("empty".into(), 10);
    tokio::spawn(actor.run(()));

    // Commit with count == 0 fails inside the screen
    let result = client.command(StepperCommand::Commit).await;
    match result {
        Err(FlowError::ScreenError(e)) => {
            assert!(e.to_string().contains("nothing to commit"));
        }
        other => panic!("Expected ScreenError, got {other:?}"),
    }

    // The screen keeps serving after a failed command
    let view = client.dispatch(StepperEvent::Increase).await.unwrap();
    assert_eq!(view.count, 1);
}

#[tokio::test]
async fn test_client_call_after_unmount_fails_with_screen_closed() {
    let (actor, client) = ScreenActor::<StepperScreen>::mount("gone".into(), 10);
    let handle = tokio::spawn(actor.run(()));

    // Abort simulates the orchestrator unmounting the screen outright
    handle.abort();
    let _ = handle.await;

    let result = client.view().await;
    assert!(matches!(result, Err(FlowError::ScreenClosed)));
}
