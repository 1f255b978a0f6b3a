use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fractal_renderer=info".parse()?))
        .init();

    fractal_renderer::run_gui(fractal_renderer::RendererConfig::default())?;

    Ok(())
}
