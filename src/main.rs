use anyhow::Context;
use envdefs::logging::{self, log_load_error, print_splash_screen};
use envdefs::{BuildEnvironment, run_pre_build_hook, syntax_from_env};
use log::info;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    logging::init();
    print_splash_screen();

    let syntax = syntax_from_env().context("ENVDEFS_SYNTAX must be `naive` or `strict`")?;
    let mut env = BuildEnvironment::from_process_env();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(error) = run_pre_build_hook(&mut env, syntax, &mut out) {
        log_load_error(&error);
        return Err(error).context("pre-build hook failed");
    }

    for flag in env.compiler_flags() {
        writeln!(out, "{}", flag).context("Failed to write compiler flags")?;
    }

    info!("{} flags written", env.cpp_defines().len());
    Ok(())
}
