use {
    clap::Parser,
    lateral_trend::{Cli, run},
    std::panic,
};

fn init_log(verbose: bool) {
    let (global_level, my_code_level) = if verbose {
        (log::LevelFilter::Warn, log::LevelFilter::Debug)
    } else if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("lateral_trend"), my_code_level)
        .init();
}

fn main() -> anyhow::Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let args = Cli::parse();
    init_log(args.verbose);

    let report = run(&args)?;
    println!("{}", report.render(args.format)?);

    Ok(())
}
