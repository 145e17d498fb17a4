//! Debugger detection and breakpoint traps.
//!
//! Detection is best effort. Whenever the platform query cannot be performed
//! the answer is `false`.

/// Whether an interactive debugger is attached to this process.
pub fn is_debugger_attached() -> bool {
    imp::is_debugger_attached()
}

/// Stop at the call site if a debugger is attached.
///
/// Without a debugger the trap usually terminates the process, so callers
/// only do this after [`is_debugger_attached`] said yes (or the user asked
/// for it explicitly).
#[inline(always)]
pub fn debug_break() {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    unsafe {
        std::arch::asm!("int3", options(nomem, nostack));
    }

    #[cfg(target_arch = "aarch64")]
    unsafe {
        std::arch::asm!("brk #0xf000", options(nomem, nostack));
    }

    #[cfg(all(
        unix,
        not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"))
    ))]
    unsafe {
        libc::raise(libc::SIGTRAP);
    }
}

/// Extract the tracer pid from the contents of `/proc/<pid>/status`.
#[cfg_attr(not(any(target_os = "linux", target_os = "android")), allow(dead_code))]
fn parse_tracer_pid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|pid| pid.trim().parse().ok())
}

#[cfg(any(target_os = "linux", target_os = "android"))]
mod imp {
    use std::fs;

    pub fn is_debugger_attached() -> bool {
        fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| super::parse_tracer_pid(&status))
            .is_some_and(|pid| pid != 0)
    }
}

#[cfg(target_vendor = "apple")]
mod imp {
    use std::{mem, process, ptr};

    // sys/proc.h
    const P_TRACED: libc::c_int = 0x0000_0800;

    pub fn is_debugger_attached() -> bool {
        let mut mib = [
            libc::CTL_KERN,
            libc::KERN_PROC,
            libc::KERN_PROC_PID,
            process::id() as libc::c_int,
        ];
        let mut info: libc::kinfo_proc = unsafe { mem::zeroed() };
        let mut size = mem::size_of::<libc::kinfo_proc>();

        let result = unsafe {
            libc::sysctl(
                mib.as_mut_ptr(),
                mib.len() as libc::c_uint,
                (&raw mut info).cast(),
                &mut size,
                ptr::null_mut(),
                0,
            )
        };

        result == 0 && info.kp_proc.p_flag & P_TRACED != 0
    }
}

#[cfg(windows)]
mod imp {
    #[link(name = "kernel32")]
    unsafe extern "system" {
        fn IsDebuggerPresent() -> i32;
    }

    pub fn is_debugger_attached() -> bool {
        unsafe { IsDebuggerPresent() != 0 }
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_vendor = "apple",
    windows
)))]
mod imp {
    pub fn is_debugger_attached() -> bool {
        false
    }
}
