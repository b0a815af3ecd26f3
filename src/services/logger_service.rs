use tracing_subscriber::{EnvFilter, fmt};

pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env()
        .add_directive("toaster=debug".parse()?)
        .add_directive("iced=error".parse()?)
        .add_directive("wgpu_core=error".parse()?)
        .add_directive("wgpu_hal=error".parse()?);

    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    Ok(())
}
