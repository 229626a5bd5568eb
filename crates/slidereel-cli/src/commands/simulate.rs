use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use slidereel_core::{AppConfig, Carousel, CarouselEvent, InstantStage, Item, Trigger};

pub struct Options {
    pub mask_width: f64,
    pub item_width: f64,
    pub step_by_step: bool,
    pub state: bool,
}

/// One entry of a simulation script
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Trigger(Trigger),
    Resize(f64),
    StepByStep(bool),
}

fn parse(step: &str) -> Result<Command> {
    let (name, arg) = match step.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (step, None),
    };

    let arg = |what: &str| arg.ok_or_else(|| anyhow!("'{}' needs {}, e.g. {}:1", name, what, name));

    let command = match name {
        "next" => Command::Trigger(Trigger::Next),
        "prev" => Command::Trigger(Trigger::Prev),
        "tick" => Command::Trigger(Trigger::Tick),
        "goto" => Command::Trigger(Trigger::Goto(
            arg("an index")?.parse().context("invalid index")?,
        )),
        "page" => Command::Trigger(Trigger::Paginate(
            arg("an index")?.parse().context("invalid index")?,
        )),
        "move" => Command::Trigger(Trigger::Move(
            arg("a delta")?.parse().context("invalid delta")?,
        )),
        "key" => Command::Trigger(Trigger::Key(
            arg("a key code")?.parse().context("invalid key code")?,
        )),
        "resize" => Command::Resize(arg("a width")?.parse().context("invalid width")?),
        "mode" => match arg("a mode")? {
            "step" => Command::StepByStep(true),
            "jump" => Command::StepByStep(false),
            other => return Err(anyhow!("unknown mode '{}', expected step or jump", other)),
        },
        other => return Err(anyhow!("unknown step '{}'", other)),
    };
    Ok(command)
}

pub fn run(config: &AppConfig, options: Options, script: &[String]) -> Result<()> {
    // Parse everything up front so a typo does not leave a half-run script
    let commands = script
        .iter()
        .map(|step| parse(step).with_context(|| format!("in step '{}'", step)))
        .collect::<Result<Vec<_>>>()?;

    let mut slider = config.slider.clone();
    slider.step_by_step |= options.step_by_step;

    let items = Item::from_slides(&config.slides);
    let stage = InstantStage::new(options.mask_width, options.item_width);
    let mut carousel = Carousel::new(items, slider, stage);
    let mut events = carousel.subscribe();
    carousel.init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_events(&mut out, &mut events)?;

    for command in commands {
        debug!("Simulating {:?}", command);
        match command {
            Command::Trigger(trigger) => {
                if !carousel.dispatch(trigger) && trigger != Trigger::Resize {
                    info!("{:?} did not start a transition", trigger);
                }
            }
            Command::Resize(width) => {
                carousel.stage_mut().set_mask_width(width);
                carousel.dispatch(Trigger::Resize);
            }
            Command::StepByStep(enabled) => carousel.set_step_by_step(enabled),
        }
        carousel.pump();
        print_events(&mut out, &mut events)?;
    }

    if options.state {
        let state = json!({
            "event": "state",
            "index": carousel.current_index(),
            "strip": carousel.strip().items(),
            "offsets": carousel.strip().offsets(),
        });
        writeln!(out, "{}", state)?;
    }

    Ok(())
}

fn print_events(out: &mut impl Write, events: &mut UnboundedReceiver<CarouselEvent>) -> Result<()> {
    while let Ok(event) = events.try_recv() {
        writeln!(out, "{}", serde_json::to_string(&event)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!(parse("next").unwrap(), Command::Trigger(Trigger::Next));
        assert_eq!(parse("goto:3").unwrap(), Command::Trigger(Trigger::Goto(3)));
        assert_eq!(parse("move:-2").unwrap(), Command::Trigger(Trigger::Move(-2)));
        assert_eq!(parse("key:39").unwrap(), Command::Trigger(Trigger::Key(39)));
        assert_eq!(parse("page:1").unwrap(), Command::Trigger(Trigger::Paginate(1)));
        assert_eq!(parse("resize:400").unwrap(), Command::Resize(400.0));
        assert_eq!(parse("mode:step").unwrap(), Command::StepByStep(true));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("goto").is_err());
        assert!(parse("goto:x").is_err());
        assert!(parse("mode:slow").is_err());
        assert!(parse("jump:2").is_err());
    }
}
