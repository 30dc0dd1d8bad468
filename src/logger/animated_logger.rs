use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 150;

/// Spinner on stderr while a slow remote call runs.
pub struct AnimatedLogger {
    message: String,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        Self {
            message,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.finish("✅ ", final_message).await;
    }

    pub async fn error(&mut self, error_message: &str) {
        self.finish("❌", error_message).await;
    }

    async fn finish(&mut self, symbol: &str, message: &str) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        eprint!("\r\x1b[K{} {}\n", symbol, message);
        let _ = std::io::stderr().flush();
    }
}
