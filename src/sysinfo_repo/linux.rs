// Linux-specific fallbacks: /proc/cpuinfo.

/// Read the first "cpu MHz" from /proc/cpuinfo (Linux). Used when sysinfo reports a 0 frequency.
pub(super) fn read_cpu_mhz_linux() -> Option<f64> {
    #[cfg(target_os = "linux")]
    {
        if let Ok(content) = std::fs::read_to_string("/proc/cpuinfo") {
            return parse_cpu_mhz(&content);
        }
    }
    None
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_cpu_mhz(cpuinfo: &str) -> Option<f64> {
    cpuinfo
        .lines()
        .filter(|line| line.starts_with("cpu MHz"))
        .filter_map(|line| line.split_once(':'))
        .filter_map(|(_, v)| v.trim().parse::<f64>().ok())
        .find(|mhz| *mhz > 0.0)
}
