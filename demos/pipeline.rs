use anyhow::Context;
use log::info;
use outcomes::{
    flat_map, safe, sequence, traverse, unwrap, Outcome, Outcome::Failure, Outcome::Success,
    Payload,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Payload, Serialize, Deserialize)]
struct Reading {
    sensor: String,
    value: i64,
}

fn parse(line: &str) -> Outcome<Reading, anyhow::Error> {
    safe(|| {
        let (sensor, value) = line
            .split_once('=')
            .with_context(|| format!("missing '=' in {:?}", line))?;
        let value = value.trim().parse::<i64>()?;

        Ok(Reading::from((sensor.trim().to_string(), value)))
    })
}

fn calibrate(reading: Reading) -> Outcome<Reading, anyhow::Error> {
    if reading.value < 0 {
        return Failure(anyhow::anyhow!("{} reported a negative value", reading.sensor));
    }
    Success(Reading {
        value: reading.value * 10,
        ..reading
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let lines = vec!["a = 1", "b = 2", "c = 3"];
    let calibrated = flat_map(lines.iter().map(|line| parse(line)), calibrate);

    let calibrated = unwrap!(calibrated, vec![]);
    info!("calibrated: {}", serde_json::to_string(&calibrated)?);

    let broken = traverse(vec!["a = 1", "b", "c = 3"], parse)
        .map(|rs| rs.len())
        .peek(|n| info!("parsed {} readings", n));
    if let Failure(e) = &broken {
        info!("stopped at first bad line: {}", e);
    }

    let negative = traverse(vec!["a = 1", "b = -2"], parse).flat_map(|rs| {
        sequence(rs.into_iter().map(calibrate))
    });
    info!("negative reading: {:?}", negative.map_error(|e| e.to_string()));

    Ok(())
}
