use anishelf::{Config, run};

fn main() -> anyhow::Result<()> {
    // Runtime sizing comes from the config file alone; the database URL
    // and everything else is resolved inside run() once the environment
    // file has been loaded.
    let worker_threads = Config::load()?.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    let runtime = builder.build()?;
    runtime.block_on(run())
}
