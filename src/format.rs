/// Headline confidence text, two decimal places.
pub fn confidence_text(confidence: f64) -> String {
    format!("Confidence {:.2}%", confidence * 100.0)
}

/// Per-score percentage, one decimal place.
pub fn score_percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_confidence_uses_two_decimals() {
        assert_eq!(confidence_text(0.9231), "Confidence 92.31%");
        assert_eq!(confidence_text(0.0), "Confidence 0.00%");
        assert_eq!(confidence_text(1.0), "Confidence 100.00%");
    }

    #[test]
    fn score_percent_uses_one_decimal() {
        assert_eq!(score_percent(0.0769), "7.7%");
        assert_eq!(score_percent(0.9231), "92.3%");
        assert_eq!(score_percent(0.0), "0.0%");
        assert_eq!(score_percent(1.0), "100.0%");
    }
}
