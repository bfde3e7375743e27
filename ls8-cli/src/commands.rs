//! CLI command implementations.

use std::fs;
use std::path::Path;

use log::debug;
use ls8_common::{ParseReport, Program};
use ls8_vm::{Console, Machine, Status};

/// Load and run a program, printing PRN output to stdout.
pub fn run(path: &Path, max_steps: Option<u64>) -> Result<(), i32> {
    let program = read_program(path)?.program;
    let mut machine = Machine::new(&program);
    let mut out = Console::stdout();

    let result = match max_steps {
        Some(limit) => machine.run_for(limit, &mut out),
        None => machine.run(&mut out).map(|()| Status::Halted),
    };

    match result {
        Ok(Status::Halted) => {
            debug!("{} halted after {} steps", path.display(), machine.steps());
            Ok(())
        }
        Ok(Status::Running) => {
            eprintln!(
                "error: step limit of {} reached before HLT (pc {:#04x})",
                machine.steps(),
                machine.pc()
            );
            Err(3)
        }
        Ok(Status::Faulted(e)) | Err(e) => {
            eprintln!("fault: {e}");
            Err(2)
        }
    }
}

/// Parse a program and report what the loader kept.
pub fn load(path: &Path) -> Result<(), i32> {
    let report = read_program(path)?;
    println!(
        "OK: {} ({} bytes, {} lines skipped)",
        path.display(),
        report.program.len(),
        report.skipped.len()
    );
    Ok(())
}

fn read_program(path: &Path) -> Result<ParseReport, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;

    Program::parse_report(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
