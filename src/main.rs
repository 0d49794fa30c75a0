// Calendar Scheduler
// Main entry point: prints the current scheduler view, optionally following the clock

use std::time::Duration as StdDuration;

use anyhow::{anyhow, Result};
use calendar_scheduler::config::AppConfig;
use calendar_scheduler::models::view_mode::ViewMode;
use calendar_scheduler::services::settings::{FilePreferenceStore, PreferenceStore};
use calendar_scheduler::services::ticker::NowTicker;
use calendar_scheduler::SchedulerState;

struct Args {
    view: Option<ViewMode>,
    watch: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        view: None,
        watch: false,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--watch" {
            args.watch = true;
        } else {
            args.view = Some(arg.parse().map_err(|e: String| anyhow!(e))?);
        }
    }
    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Scheduler");

    let args = parse_args()?;
    let config = AppConfig::load()?;

    let store = FilePreferenceStore::in_dir(config.resolve_preferences_dir());
    log::debug!("Time settings stored at {}", store.path().display());

    let mut state = SchedulerState::new(store);
    state.set_view_mode(args.view.unwrap_or(config.default_view));
    state.add_sample_events();

    print_view(&mut state);

    if args.watch {
        follow_clock(&mut state, config.now_refresh()).await;
    }

    Ok(())
}

fn print_view<S: PreferenceStore>(state: &mut SchedulerState<S>) {
    println!("{}", state.header_label());
    println!("{}", state.slot_labels().join("  "));
    println!();

    for event in state.visible_events() {
        println!(
            "  {} {}-{}  [{}] {}",
            event.start.format("%a %d"),
            event.start.format("%H:%M"),
            event.end.format("%H:%M"),
            event.color,
            event.title
        );
    }
}

async fn follow_clock<S: PreferenceStore>(state: &mut SchedulerState<S>, period: StdDuration) {
    let ticker = NowTicker::spawn(period);
    let mut now_rx = ticker.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted, stopping");
                break;
            }
            changed = now_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let now = *now_rx.borrow_and_update();
                state.set_now(now);
                match state.now_indicator_offset() {
                    Some(offset) => println!("{} now marker at {:.1}", now.format("%H:%M"), offset),
                    None => println!("{} outside visible hours", now.format("%H:%M")),
                }
            }
        }
    }

    ticker.cancel();
}
