use log::info;
use mdblog::{bootstrap, generate, Context};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let ctx = Context::default();

    let seeded = bootstrap::run(&ctx)?;
    if !seeded.is_empty() {
        info!("seeded {seeded:?}");
    }

    let summary = generate(&ctx)?;
    info!(
        "generated {} posts and {} pages under {:?}",
        summary.posts, summary.pages, ctx.root
    );

    Ok(())
}
