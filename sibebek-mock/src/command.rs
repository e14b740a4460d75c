use std::collections::HashMap;
use std::error::Error;
use std::thread;

use rumqttd::Notification;
use rumqttd::local::LinkTx;
use tokio::sync::mpsc;

use sibebek_api::Channel;
use sibebek_api::payload::parse_float;

use crate::broker::MockBroker;

/// Pins a channel to a fixed value, or hands it back to the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Pin(Channel, f64),
    Release(Channel),
}

impl Command {
    /// `{prefix}/mock/{channel}` with a number pins, anything else releases.
    pub fn parse(prefix: &str, topic: &str, payload: &[u8]) -> Option<Command> {
        let rest = topic.strip_prefix(prefix)?.strip_prefix("/mock/")?;
        let channel = Channel::ALL.into_iter().find(|channel| channel.name() == rest)?;
        let value = parse_float(&String::from_utf8_lossy(payload));

        if value.is_finite() {
            Some(Command::Pin(channel, value))
        } else {
            Some(Command::Release(channel))
        }
    }
}

#[derive(Debug, Default)]
pub struct Overrides {
    pinned: HashMap<Channel, f64>,
}

impl Overrides {
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Pin(channel, value) => {
                self.pinned.insert(channel, value);
            }
            Command::Release(channel) => {
                self.pinned.remove(&channel);
            }
        }
    }

    pub fn get(&self, channel: Channel) -> Option<f64> {
        self.pinned.get(&channel).copied()
    }
}

pub struct CommandHandler {
    pub cmd_tx: mpsc::Sender<Command>,
    pub cmd_rx: mpsc::Receiver<Command>,
}

impl CommandHandler {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);

        CommandHandler { cmd_tx, cmd_rx }
    }

    /// Listens on `{prefix}/mock/#`. The returned link has to stay alive for
    /// as long as commands should be received.
    pub fn start_command_processor(&self, broker: &MockBroker, prefix: &str) -> Result<LinkTx, Box<dyn Error>> {
        let (mut link_tx, mut link_rx) = broker.link("sibebek-mock-commands")?;
        link_tx.subscribe(format!("{prefix}/mock/#"))?;

        let cmd_tx = self.cmd_tx.clone();
        let prefix = prefix.to_string();

        thread::spawn(move || {
            loop {
                let notification = match link_rx.recv() {
                    Ok(Some(v)) => v,
                    Ok(None) => continue,
                    Err(e) => {
                        tracing::error!("command link closed: {}", e);
                        break;
                    }
                };

                match notification {
                    Notification::Forward(forward) => {
                        let topic = String::from_utf8_lossy(&forward.publish.topic);
                        match Command::parse(&prefix, &topic, &forward.publish.payload) {
                            Some(command) => {
                                tracing::debug!("Receive: {:?}", command);
                                if cmd_tx.blocking_send(command).is_err() {
                                    break;
                                }
                            }
                            None => tracing::debug!("ignore command on {}", topic),
                        }
                    }
                    v => tracing::trace!("{v:?}"),
                }
            }
        });

        Ok(link_tx)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
