use edf_vd_sim::prelude::*;

pub mod prelude {
    pub use super::args::prelude::*;
}

pub mod args;

use prelude::*;

fn main() {
    env_logger::init();

    let args = <Args as clap::Parser>::parse();

    match run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let tasks_path = std::path::Path::new(&args.tasks_file);
    let exec_times_path = std::path::Path::new(&args.exec_times_file);

    let (tasks, hyperperiod, jobs, slices) = simulate(tasks_path, exec_times_path, args.format)?;
    if !args.quiet {
        println!("Parsed {} tasks from {}.", tasks.len(), args.tasks_file);
        println!("HyperPeriod = {hyperperiod:.2}");
    }

    let schedule_file = std::fs::File::create(&args.schedule_out)?;
    write_schedule(std::io::BufWriter::new(schedule_file), &tasks, &slices)?;
    if !args.quiet {
        println!("Schedule written to {}.", args.schedule_out);
    }

    let analysis = analyze(&jobs, &slices);
    let analysis_file = std::fs::File::create(&args.analysis_out)?;
    write_analysis(std::io::BufWriter::new(analysis_file), &analysis)?;
    if !args.quiet {
        println!("Analysis written to {}.", args.analysis_out);
        println!("Done.");
    }

    Ok(())
}
