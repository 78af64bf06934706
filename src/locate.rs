use std::{
    io::{BufRead, BufReader},
    process::{Command, Stdio},
    sync::mpsc,
    thread,
    time::Duration,
};

use chowmap_core::gateways::LocationGateway;
use chowmap_entities::geo::MapPoint;

/// Location gateway backed by an external locator command.
///
/// The command is run through the shell and must print a `lat,lng`
/// pair on its first stdout line. Whatever goes wrong, the answer
/// degrades to "position unknown".
#[derive(Debug, Clone)]
pub struct CommandLocator {
    command: String,
    timeout: Duration,
}

impl CommandLocator {
    pub fn new(command: String, timeout: Duration) -> Self {
        Self { command, timeout }
    }
}

impl LocationGateway for CommandLocator {
    fn current_position(&self) -> Option<MapPoint> {
        let mut child = match Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                log::warn!("Unable to run the locator command: {err}");
                return None;
            }
        };
        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                log::warn!("The locator command exposes no stdout handle");
                return None;
            }
        };

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut first_line = String::new();
            let result = BufReader::new(stdout)
                .read_line(&mut first_line)
                .map(|_| first_line);
            // The receiver is gone when the locator timed out.
            tx.send(result).ok();
        });

        let line = match rx.recv_timeout(self.timeout) {
            Ok(Ok(line)) => line,
            Ok(Err(err)) => {
                log::warn!("Unable to read the locator output: {err}");
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
            Err(_) => {
                log::warn!(
                    "No position fix within {:?}, keeping the incoming order",
                    self.timeout
                );
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
        };
        // The fix is on the first line; the child is stopped even if
        // it would keep streaming updates.
        let _ = child.kill();
        let _ = child.wait();

        let line = line.trim();
        if line.is_empty() {
            log::warn!("The locator command produced no position fix");
            return None;
        }
        match line.parse() {
            Ok(pos) => Some(pos),
            Err(err) => {
                log::warn!("Unparseable locator output {line:?}: {err}");
                None
            }
        }
    }
}
