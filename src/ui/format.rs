use inference::InferenceErr;

pub const UNAVAILABLE_TITLE: &str = "Unable to load the model.";

/// The sentence shown for a successful prediction.
pub fn premium_line(premium: f64) -> String {
    format!("Predicted Medical Insurance Premium Price: {}", currency(premium))
}

/// The sentence shown when no premium could be produced.
pub fn error_line(err: &InferenceErr) -> String {
    match err {
        InferenceErr::ModelUnavailable { reason } => format!("{UNAVAILABLE_TITLE} {reason}"),
        InferenceErr::PredictionFailed { cause } => failure_line(cause),
    }
}

pub fn failure_line(cause: &str) -> String {
    format!("Error making prediction: {cause}")
}

/// Formats an amount as US dollars with thousands separators and two decimals.
///
/// Negative amounts get a leading `-`, e.g. `-$1,234.50`.
pub fn currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}${}.{frac:02}", group_thousands(whole))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_and_rounds() {
        assert_eq!(currency(12345.678), "$12,345.68");
        assert_eq!(currency(4625.98), "$4,625.98");
        assert_eq!(currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(currency(999.999), "$1,000.00");
    }

    #[test]
    fn small_amounts() {
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(0.5), "$0.50");
        assert_eq!(currency(7.0), "$7.00");
    }

    #[test]
    fn sentences() {
        assert_eq!(
            premium_line(12345.67),
            "Predicted Medical Insurance Premium Price: $12,345.67"
        );
        assert_eq!(
            error_line(&InferenceErr::PredictionFailed {
                cause: "boom".into()
            }),
            "Error making prediction: boom"
        );
        assert_eq!(
            error_line(&InferenceErr::ModelUnavailable {
                reason: "io error: not found".into()
            }),
            "Unable to load the model. io error: not found"
        );
    }

    #[test]
    fn negative_amounts_lead_with_minus() {
        assert_eq!(currency(-1234.5), "-$1,234.50");
        assert_eq!(currency(-0.001), "$0.00");
    }
}
