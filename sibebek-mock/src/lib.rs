use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use rumqttd::local::LinkTx;
use tokio::time;

use sibebek_api::Channel;

use crate::broker::MockBroker;
use crate::command::{CommandHandler, Overrides};
use crate::settings::Settings;
use crate::simulate::noisy;

mod broker;
mod command;
pub mod settings;
pub mod simulate;

pub async fn run(settings: &Arc<Settings>) -> Result<(), Box<dyn Error>> {
    let prefix = settings.broker.topic_prefix.clone();
    let mock = &settings.mock;

    let broker = MockBroker::new(mock)?;
    let mut command_handler = CommandHandler::new();
    let _command_link = command_handler.start_command_processor(&broker, &prefix)?;
    let (mut link_tx, _link_rx) = broker.link("sibebek-mock-sensors")?;
    let _broker = broker.start();

    tracing::info!(
        "Mock broker on {}:{} (mqtt) and {}:{} (ws)",
        mock.host,
        mock.tcp_port,
        mock.host,
        mock.ws_port
    );

    let mut overrides = Overrides::default();
    let mut interval = time::interval(Duration::from_secs(mock.interval_secs));
    let mut tick: u64 = 0;
    loop {
        tokio::select! {
            Some(command) = command_handler.cmd_rx.recv() => {
                overrides.apply(command);
            },
            _ = interval.tick() => {
                let day_fraction = day_fraction(tick, mock.day_length);
                let values = sample(&overrides, day_fraction, &mut rand::rng());

                publish_readings(&mut link_tx, &prefix, &values)?;

                tick += 1;
            }
        }
    }
}

fn day_fraction(tick: u64, day_length: u32) -> f64 {
    let day_length = u64::from(day_length.max(1));

    (tick % day_length) as f64 / day_length as f64
}

/// One value per channel: the pinned one if set, else the noisy curve.
fn sample<R: Rng + ?Sized>(overrides: &Overrides, day_fraction: f64, rng: &mut R) -> Vec<(Channel, f64)> {
    Channel::ALL
        .into_iter()
        .map(|channel| {
            let value = overrides
                .get(channel)
                .unwrap_or_else(|| noisy(channel, day_fraction, rng));
            (channel, value)
        })
        .collect()
}

fn publish_readings(client: &mut LinkTx, prefix: &str, values: &[(Channel, f64)]) -> Result<(), Box<dyn Error>> {
    for (channel, value) in values {
        let topic = channel.topic(prefix);
        let payload = format!("{value:.1}");

        tracing::debug!("Send: {} {}", topic, payload);

        client.publish(topic, payload.into_bytes())?;
    }

    Ok(())
}
