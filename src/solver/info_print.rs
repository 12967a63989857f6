use super::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::timers::Timers;
use std::io::{Result, Write};
use std::time::Duration;

impl ConfigurablePrintTarget for SolveInfo {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> Result<String> {
        self.stream.get_print_buffer()
    }
}

const RULE: &str = "-------------------------------------------------------------";

fn print_banner(out: &mut PrintTarget) -> Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "         linsys v{}  -  exact Gaussian elimination",
        crate::VERSION
    )?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

impl SolveInfo {
    pub(crate) fn print_configuration(
        &mut self,
        settings: &SolverSettings,
        system: &LinearSystem,
    ) -> Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        let out = &mut self.stream;
        print_banner(out)?;

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  equations     = {}", system.len())?;
        writeln!(out, "  variables     = {}", system.dimension())?;

        writeln!(out, "\nsettings:")?;
        writeln!(out, "  precision     = {} digits", settings.precision)?;
        writeln!(out, "  tolerance     = {}", settings.tolerance.normalize())?;
        writeln!(out, "  reductions    = {}", settings.print_reductions)?;

        writeln!(out, "\n{}", system)?;
        out.flush()?;
        Ok(())
    }

    pub(crate) fn print_reduction(
        &mut self,
        settings: &SolverSettings,
        label: &str,
        system: &LinearSystem,
    ) -> Result<()> {
        if !(settings.verbose && settings.print_reductions) {
            return Ok(());
        }

        let out = &mut self.stream;
        writeln!(out, "\n{}:", label)?;
        writeln!(out, "{}", system)?;
        Ok(())
    }

    pub(crate) fn print_footer(
        &mut self,
        settings: &SolverSettings,
        solution: &Solution,
        timers: &Timers,
    ) -> Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "Terminated with status = {}", self.status)?;
        writeln!(
            out,
            "rank = {}, free variables = {}",
            self.rank, self.free_variables
        )?;
        writeln!(out, "{}", solution)?;
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        timers.print(out)?;
        out.flush()?;
        Ok(())
    }
}
