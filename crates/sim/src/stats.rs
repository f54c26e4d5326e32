use std::fmt;

/// Counters accumulated over a run. All four are monotonically
/// non-decreasing; the rates hold exactly for every prefix of the trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub translations: u64,
    pub tlb_hits: u64,
    pub tlb_misses: u64,
    pub page_faults: u64,
}

impl Stats {
    pub fn page_fault_rate(&self) -> f64 {
        if self.translations == 0 {
            return 0.0;
        }
        self.page_faults as f64 / self.translations as f64
    }

    pub fn tlb_hit_rate(&self) -> f64 {
        if self.translations == 0 {
            return 0.0;
        }
        self.tlb_hits as f64 / self.translations as f64
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Translated Addresses = {}", self.translations)?;
        writeln!(f, "Page Faults = {}", self.page_faults)?;
        writeln!(f, "Page Fault Rate = {:.3}", self.page_fault_rate())?;
        writeln!(f, "TLB Hits = {}", self.tlb_hits)?;
        writeln!(f, "TLB Misses = {}", self.tlb_misses)?;
        write!(f, "TLB Hit Rate = {:.3}", self.tlb_hit_rate())
    }
}
