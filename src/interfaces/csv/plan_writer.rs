use crate::domain::allocation::AllocationPlan;
use crate::error::Result;
use std::io::Write;

/// Writes an allocation plan as CSV, one line per obligation.
pub struct PlanWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PlanWriter<W> {
    /// Creates a new `PlanWriter` over any `Write` target (e.g., stdout).
    pub fn new(target: W) -> Self {
        let writer = csv::WriterBuilder::new().from_writer(target);
        Self { writer }
    }

    pub fn write_plan(&mut self, plan: &AllocationPlan) -> Result<()> {
        for line in &plan.lines {
            self.writer.serialize(line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
