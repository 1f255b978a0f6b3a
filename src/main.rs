use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use fractal_renderer::{
    DisplayStats, EngineError, ExplorerSession, HostEvent, KernelSelector, KeyCode, RecordingDisplay, RendererConfig,
    ScrollDirection, SessionControl,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KernelArg {
    Mandelbrot,
    Tricorn,
    BurningShip,
    Newton,
}

impl From<KernelArg> for KernelSelector {
    fn from(kernel: KernelArg) -> Self {
        match kernel {
            KernelArg::Mandelbrot => Self::Mandelbrot,
            KernelArg::Tricorn => Self::Tricorn,
            KernelArg::BurningShip => Self::BurningShip,
            KernelArg::Newton => Self::Newton,
        }
    }
}

/// Replays a scripted exploration session against an in-memory display.
#[derive(Debug, Parser)]
#[command(name = "fractal_renderer")]
#[command(about = "Headless fractal explorer session")]
struct Args {
    #[arg(long, default_value_t = fractal_renderer::config::DEFAULT_WIDTH)]
    width: u32,
    #[arg(long, default_value_t = fractal_renderer::config::DEFAULT_HEIGHT)]
    height: u32,
    #[arg(long, default_value_t = fractal_renderer::config::DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,
    #[arg(long, value_enum, default_value_t = KernelArg::Mandelbrot)]
    kernel: KernelArg,
    /// Upper bound on animation ticks after each scripted event
    #[arg(long, default_value_t = 64)]
    ticks: u32,
    /// Seconds of animation per tick
    #[arg(long, default_value_t = 0.5)]
    dt: f64,
    /// Cap on render workers; defaults to the available parallelism
    #[arg(long)]
    workers: Option<std::num::NonZeroU32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunSummary {
    frames_presented: u64,
    passes_completed: u64,
    display: DisplayStats,
}

fn script(width: u32, height: u32) -> Vec<HostEvent> {
    vec![
        HostEvent::Scroll(ScrollDirection::Up),
        HostEvent::Scroll(ScrollDirection::Up),
        HostEvent::PointerClick {
            x: f64::from(width) * 0.75,
            y: f64::from(height) * 0.5,
        },
        HostEvent::KeyPress(KeyCode::Digit(3)),
        HostEvent::Scroll(ScrollDirection::Down),
        HostEvent::KeyPress(KeyCode::R),
        HostEvent::KeyPress(KeyCode::Digit(4)),
        HostEvent::Quit,
    ]
}

/// Ticks until the view settles and the last pass has been presented.
fn settle(
    session: &mut ExplorerSession<RecordingDisplay>,
    dt: f64,
    max_ticks: u32,
    frames_presented: &mut u64,
) -> Result<(), EngineError> {
    let mut ticks = 0;

    loop {
        session.engine().wait_until_idle();
        if session.present_if_fresh(|frame| {
            tracing::debug!(
                generation = frame.generation,
                kernel = %frame.request.kernel,
                zoom = frame.request.view.zoom,
                elapsed_ms = frame.duration.as_secs_f64() * 1000.0,
                "frame presented"
            );
        }) {
            *frames_presented += 1;
        }

        if session.is_quiescent() {
            return Ok(());
        }
        if ticks >= max_ticks {
            tracing::warn!(ticks, "view still animating, moving on");
            return Ok(());
        }

        session.tick(dt)?;
        ticks += 1;
    }
}

fn run(args: &Args) -> anyhow::Result<RunSummary> {
    let config = RendererConfig {
        width: args.width,
        height: args.height,
        max_iterations: args.max_iterations,
        initial_kernel: args.kernel.into(),
        max_workers: args.workers,
        ..RendererConfig::default()
    };
    config.validate().context("invalid renderer configuration")?;

    let display = RecordingDisplay::new(config.width, config.height)?;
    let mut session = ExplorerSession::new(&config, display).context("cannot start explorer session")?;
    tracing::info!(
        width = config.width,
        height = config.height,
        kernel = %config.initial_kernel,
        workers = session.engine().workers(),
        "session started"
    );

    let mut frames_presented = 0;
    settle(&mut session, args.dt, args.ticks, &mut frames_presented)?;

    for event in script(config.width, config.height) {
        tracing::debug!(?event, "replaying event");

        if session.handle_event(event)? == SessionControl::Quit {
            break;
        }

        settle(&mut session, args.dt, args.ticks, &mut frames_presented)?;

        let status = session.status();
        tracing::info!(
            kernel = %status.kernel,
            zoom = status.current.zoom,
            offset_x = status.current.offset_x,
            offset_y = status.current.offset_y,
            "step settled"
        );
    }

    let summary = RunSummary {
        frames_presented,
        passes_completed: session.engine().passes_completed(),
        display: session.engine().with_display(|display| display.stats()),
    };
    tracing::info!(
        frames = summary.frames_presented,
        passes = summary.passes_completed,
        blits = summary.display.blits,
        presents = summary.display.presents,
        "session finished"
    );

    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fractal_renderer=info".parse()?))
        .init();

    let args = Args::parse();
    run(&args)?;

    Ok(())
}
