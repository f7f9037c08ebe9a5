use crate::domain::ports::reclaimer::MemoryReclaimer;

/// Upper bound on the number of process ids requested from the kernel.
#[cfg(windows)]
const MAX_PIDS: usize = 4096;

#[cfg(windows)]
#[allow(clippy::cast_possible_truncation)]
fn trim_all_working_sets() -> usize {
    use winapi::shared::minwindef::{DWORD, FALSE};
    use winapi::um::handleapi::CloseHandle;
    use winapi::um::processthreadsapi::OpenProcess;
    use winapi::um::psapi::{K32EmptyWorkingSet, K32EnumProcesses};
    use winapi::um::winnt::{PROCESS_QUERY_INFORMATION, PROCESS_SET_QUOTA};

    let mut pids = vec![0 as DWORD; MAX_PIDS];
    let mut bytes_returned: DWORD = 0;
    let cb = (pids.len() * std::mem::size_of::<DWORD>()) as DWORD;

    // SAFETY: pids is a live writable buffer of cb bytes.
    let ok = unsafe { K32EnumProcesses(pids.as_mut_ptr(), cb, &mut bytes_returned) };
    if ok == 0 {
        tracing::debug!("Process enumeration failed");
        return 0;
    }

    let count = bytes_returned as usize / std::mem::size_of::<DWORD>();
    let mut trimmed = 0_usize;

    for &pid in &pids[..count] {
        // Pid 0 is the idle pseudo-process.
        if pid == 0 {
            continue;
        }
        // SAFETY: the handle is null-checked before use and closed on every path.
        unsafe {
            let handle = OpenProcess(PROCESS_QUERY_INFORMATION | PROCESS_SET_QUOTA, FALSE, pid);
            if handle.is_null() {
                continue;
            }
            if K32EmptyWorkingSet(handle) != 0 {
                trimmed += 1;
            }
            CloseHandle(handle);
        }
    }

    trimmed
}

#[cfg(not(windows))]
fn trim_all_working_sets() -> usize {
    tracing::debug!("Working-set trim is a no-op on this platform");
    0
}

/// Memory reclaimer backed by the Win32 working-set APIs.
///
/// Enumerates every visible process and asks the kernel to empty its
/// working set. Protected and system processes refuse the open and are
/// skipped, so the pass is best-effort by construction. On non-Windows
/// hosts the call is a logged no-op that trims nothing.
pub struct WorkingSetReclaimer;

impl WorkingSetReclaimer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for WorkingSetReclaimer {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryReclaimer for WorkingSetReclaimer {
    fn reclaim(&self) -> usize {
        trim_all_working_sets()
    }
}
