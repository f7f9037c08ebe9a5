pub trait MemoryReclaimer: Send + Sync {
    /// Ask the operating system to shrink process working sets,
    /// returning the number of processes successfully trimmed.
    ///
    /// Best-effort: processes that cannot be opened are skipped.
    fn reclaim(&self) -> usize;
}
