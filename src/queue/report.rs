//! Plain-text rendering of queue contents.

use super::facade::PriorityQueue;
use crate::heap::Ranked;

/// Header line written by [`priority_order`].
pub const PRIORITY_ORDER_HEADER: &str = "Priority Order (highest first):";

/// Renders every payload in priority order, one ranked line each.
///
/// The queue is not modified.
///
/// ```text
/// Priority Order (highest first):
///  1. R103  -  MaxBoth
///  2. R2000004  -  Sam Rivera
/// ```
pub fn priority_order<P: Ranked>(queue: &PriorityQueue<P>) -> String {
    let mut out = String::new();
    out.push_str(PRIORITY_ORDER_HEADER);
    out.push('\n');
    for (rank, payload) in queue.to_list_in_priority_order().iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {}  -  {}\n",
            rank + 1,
            payload.id(),
            payload.name()
        ));
    }
    out
}

/// Renders a single payload with its score to five decimals.
pub fn score_line<P: Ranked + ?Sized>(payload: &P) -> String {
    format!(
        "{}  -  {}  (score={:.5})",
        payload.id(),
        payload.name(),
        payload.priority()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str, f64);

    impl Ranked for Row {
        fn priority(&self) -> f64 {
            self.2
        }
        fn units(&self) -> i64 {
            0
        }
        fn gpa(&self) -> f64 {
            0.0
        }
        fn name(&self) -> &str {
            self.0
        }
        fn id(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn test_priority_order_format() {
        let queue: PriorityQueue<Row> = vec![Row("Low", "R2", 0.1), Row("High", "R1", 0.9)]
            .into_iter()
            .collect();

        let text = priority_order(&queue);
        assert_eq!(
            text,
            "Priority Order (highest first):\n 1. R1  -  High\n 2. R2  -  Low\n"
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_priority_order_empty() {
        let queue: PriorityQueue<Row> = PriorityQueue::new();
        assert_eq!(priority_order(&queue), format!("{PRIORITY_ORDER_HEADER}\n"));
    }

    #[test]
    fn test_rank_width() {
        let queue: PriorityQueue<Row> = (0..10)
            .map(|i| Row("n", "R", f64::from(i)))
            .collect();
        let text = priority_order(&queue);
        assert!(text.contains("\n 9. R  -  n\n"));
        assert!(text.ends_with("10. R  -  n\n"));
    }

    #[test]
    fn test_score_line() {
        let row = Row("Adam Xiong", "R008", 0.708333333);
        assert_eq!(score_line(&row), "R008  -  Adam Xiong  (score=0.70833)");
    }
}
