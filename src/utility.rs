use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

pub fn average_duration(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::ZERO;
    }
    divide_duration(durations.iter().sum(), durations.len())
}

fn divide_duration(total: Duration, count: usize) -> Duration {
    match u32::try_from(count) {
        Ok(count) => total / count,
        Err(_) => total.div_f64(count as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average() {
        assert_eq!(average_duration(&[]), Duration::ZERO);
        assert_eq!(
            average_duration(&[Duration::from_millis(10), Duration::from_millis(30)]),
            Duration::from_millis(20)
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn divide_by_more_than_u32_max() {
        let count = u32::MAX as usize + 1;
        assert_eq!(
            divide_duration(Duration::from_secs(1 << 32), count),
            Duration::from_secs(1)
        );
    }
}
