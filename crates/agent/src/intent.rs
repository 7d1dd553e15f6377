//! Intent resolution
//!
//! An explicit ordered table of predicate+handler pairs evaluated against
//! the lowercased utterance. First match wins; a rule whose keywords match
//! but whose referenced data is absent returns `None` and resolution falls
//! through. The chain terminates in the help rule, so `resolve` always
//! produces a string.
//!
//! Order is semantically significant: several keyword sets overlap, so
//! specific rules (order superlatives, temporal filters, the per-branch
//! order-count phrasing) sit before the generic keyword rules that would
//! otherwise swallow them.

use chrono::Datelike;
use dashboard_core::{DashboardContext, LanguageFlags, ResponseLanguage, Store, StorePerformance};

use crate::templates::{render, Answer};
use crate::temporal::{ExplicitDate, TemporalQuery};

/// Everything a rule can inspect
pub struct QueryInput<'a> {
    pub lowered: String,
    pub flags: LanguageFlags,
    pub temporal: TemporalQuery,
    pub context: &'a DashboardContext,
}

/// One entry in the resolution chain
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&QueryInput) -> Option<Answer>,
}

/// The resolution chain, in priority order
pub static RULES: &[Rule] = &[
    Rule { name: "greeting", apply: greeting },
    Rule { name: "most_orders", apply: most_orders },
    Rule { name: "least_orders", apply: least_orders },
    Rule { name: "highest_sales", apply: highest_sales },
    Rule { name: "lowest_sales", apply: lowest_sales },
    Rule { name: "target_gap", apply: target_gap },
    Rule { name: "temporal", apply: temporal },
    Rule { name: "branch_order_count", apply: branch_order_count },
    Rule { name: "total_sales", apply: total_sales },
    Rule { name: "total_orders", apply: total_orders },
    Rule { name: "best_branch", apply: best_branch },
    Rule { name: "branch_detail", apply: branch_detail },
    Rule { name: "average_order", apply: average_order },
    Rule { name: "help", apply: help },
];

/// Resolve an utterance against a dashboard snapshot
///
/// Never fails; the final rule always answers.
pub fn resolve(utterance: &str, context: &DashboardContext) -> String {
    let flags = LanguageFlags::detect(utterance);
    let lang = ResponseLanguage::select(flags);
    let lowered = utterance.to_lowercase();
    let temporal = TemporalQuery::extract(&lowered);

    let input = QueryInput {
        lowered,
        flags,
        temporal,
        context,
    };

    for rule in RULES {
        if let Some(answer) = (rule.apply)(&input) {
            tracing::debug!(rule = rule.name, language = ?lang, "intent resolved");
            return render(&answer, lang);
        }
    }

    // The help rule always matches; this is unreachable in practice
    render(&Answer::Help, lang)
}

fn contains_any(lowered: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lowered.contains(n))
}

/// Whole-word check for short Latin tokens ("hi" must not fire on "highest")
fn has_word(lowered: &str, word: &str) -> bool {
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| w == word)
}

fn order_token(lowered: &str) -> bool {
    contains_any(lowered, &["order", "طلب", "أوردر", "اوردر"])
}

fn greeting(input: &QueryInput) -> Option<Answer> {
    let words = ["hi", "hey", "hello", "ahlan", "salam"];
    let arabic = ["مرحبا", "هاي", "السلام"];
    if words.iter().any(|w| has_word(&input.lowered, w))
        || contains_any(&input.lowered, &arabic)
    {
        Some(Answer::Greeting)
    } else {
        None
    }
}

/// First store in fixed order with the strictly greatest value
fn max_by_key<F: Fn(&StorePerformance) -> f64>(
    stores: &[StorePerformance],
    key: F,
) -> Option<&StorePerformance> {
    stores.iter().fold(None, |best, s| match best {
        Some(b) if key(b) >= key(s) => Some(b),
        _ => Some(s),
    })
}

fn min_by_key<F: Fn(&StorePerformance) -> f64>(
    stores: &[StorePerformance],
    key: F,
) -> Option<&StorePerformance> {
    stores.iter().fold(None, |best, s| match best {
        Some(b) if key(b) <= key(s) => Some(b),
        _ => Some(s),
    })
}

fn most_orders(input: &QueryInput) -> Option<Answer> {
    if !(contains_any(&input.lowered, &["أكثر", "اكثر", "aktar", "most"])
        && order_token(&input.lowered))
    {
        return None;
    }
    let store = max_by_key(&input.context.store_performance, |s| s.orders as f64)?;
    Some(Answer::MostOrders {
        store: store.name.clone(),
        orders: store.orders,
    })
}

fn least_orders(input: &QueryInput) -> Option<Answer> {
    if !(contains_any(&input.lowered, &["أقل", "اقل", "a2al", "least"])
        && order_token(&input.lowered))
    {
        return None;
    }
    let store = min_by_key(&input.context.store_performance, |s| s.orders as f64)?;
    Some(Answer::LeastOrders {
        store: store.name.clone(),
        orders: store.orders,
    })
}

fn highest_sales(input: &QueryInput) -> Option<Answer> {
    if !(contains_any(&input.lowered, &["أعلى", "اعلى", "a3la", "highest"])
        || (input.lowered.contains("most") && input.lowered.contains("sales")))
    {
        return None;
    }
    let store = max_by_key(&input.context.store_performance, |s| s.sales)?;
    Some(Answer::HighestSales {
        store: store.name.clone(),
        sales: store.sales,
    })
}

fn lowest_sales(input: &QueryInput) -> Option<Answer> {
    if !(contains_any(&input.lowered, &["أقل", "اقل", "a2al", "lowest"])
        || (input.lowered.contains("least") && input.lowered.contains("sales")))
    {
        return None;
    }
    let store = min_by_key(&input.context.store_performance, |s| s.sales)?;
    Some(Answer::LowestSales {
        store: store.name.clone(),
        sales: store.sales,
    })
}

fn target_gap(input: &QueryInput) -> Option<Answer> {
    if !contains_any(
        &input.lowered,
        &["محتاج", "me7tag", "need", "تحقيق", "target", "هدف"],
    ) {
        return None;
    }

    let remaining: f64 = input
        .context
        .store_performance
        .iter()
        .map(|s| (s.target - s.sales).max(0.0))
        .sum();

    // A zero average would divide away the estimate; 100 EGP stands in
    let avg = if input.context.avg_order_value > 0.0 {
        input.context.avg_order_value
    } else {
        100.0
    };
    let orders_needed = (remaining / avg).ceil() as u64;

    Some(Answer::TargetGap {
        remaining,
        orders_needed,
        avg_order_value: avg,
    })
}

fn temporal(input: &QueryInput) -> Option<Answer> {
    if !input.temporal.is_temporal() {
        return None;
    }

    let branch = Store::find_mention(&input.lowered);

    if let Some((start, end)) = input.temporal.day_range {
        return range_answer(input.context, branch, start, end);
    }

    // A single day: explicit date, "day N", or marker-only falling back to
    // the most recent date in the record set
    let date = match input.temporal.explicit_date {
        Some(ExplicitDate::Iso(date)) => Some(date),
        Some(ExplicitDate::DayMonth(day, month)) => input
            .context
            .sales_data
            .iter()
            .map(|r| r.date)
            .filter(|d| d.day() == day && d.month() == month)
            .max(),
        None => match input.temporal.day_number {
            Some(day) => input
                .context
                .sales_data
                .iter()
                .map(|r| r.date)
                .filter(|d| d.day() == day)
                .max(),
            None => input.context.latest_date(),
        },
    }?;

    day_answer(input.context, branch, date)
}

fn range_answer(
    context: &DashboardContext,
    branch: Option<Store>,
    start: u32,
    end: u32,
) -> Option<Answer> {
    let in_range: Vec<_> = context
        .sales_data
        .iter()
        .filter(|r| (start..=end).contains(&r.date.day()))
        .collect();
    if in_range.is_empty() {
        return None;
    }

    match branch {
        Some(store) => {
            let sales: f64 = in_range
                .iter()
                .filter(|r| r.store_name == store.name())
                .map(|r| r.sales)
                .sum();
            let orders: u32 = in_range
                .iter()
                .filter(|r| r.store_name == store.name())
                .map(|r| r.orders)
                .sum();
            Some(Answer::RangeBranch {
                store: store.name().to_string(),
                start,
                end,
                sales,
                orders,
            })
        }
        None => {
            let sales: f64 = in_range.iter().map(|r| r.sales).sum();
            let orders: u32 = in_range.iter().map(|r| r.orders).sum();
            Some(Answer::RangeTotal { start, end, sales, orders })
        }
    }
}

fn day_answer(
    context: &DashboardContext,
    branch: Option<Store>,
    date: chrono::NaiveDate,
) -> Option<Answer> {
    let on_day: Vec<_> = context
        .sales_data
        .iter()
        .filter(|r| r.date == date)
        .collect();
    if on_day.is_empty() {
        return None;
    }

    let label = date.to_string();

    match branch {
        Some(store) => {
            let matching: Vec<_> = on_day
                .iter()
                .filter(|r| r.store_name == store.name())
                .collect();
            if matching.is_empty() {
                // Branch mentioned but absent that day; let later rules try
                return None;
            }
            let sales: f64 = matching.iter().map(|r| r.sales).sum();
            let orders: u32 = matching.iter().map(|r| r.orders).sum();
            Some(Answer::DayBranch {
                store: store.name().to_string(),
                label,
                sales,
                orders,
            })
        }
        None => {
            let sales: f64 = on_day.iter().map(|r| r.sales).sum();
            let orders: u32 = on_day.iter().map(|r| r.orders).sum();
            Some(Answer::DayTotal { label, sales, orders })
        }
    }
}

fn branch_order_count(input: &QueryInput) -> Option<Answer> {
    if !(contains_any(&input.lowered, &["عامل", "3amel"])
        && contains_any(&input.lowered, &["كام", "kam"])
        && order_token(&input.lowered))
    {
        return None;
    }
    let store = Store::find_mention(&input.lowered)?;
    let perf = input.context.performance(store)?;
    Some(Answer::BranchOrderCount {
        store: perf.name.clone(),
        orders: perf.orders,
    })
}

fn total_sales(input: &QueryInput) -> Option<Answer> {
    if !contains_any(&input.lowered, &["sales", "مبيعات"]) {
        return None;
    }
    Some(Answer::TotalSales {
        sales: input.context.total_sales,
    })
}

fn total_orders(input: &QueryInput) -> Option<Answer> {
    if !(order_token(&input.lowered) || input.lowered.contains("kam el")) {
        return None;
    }
    Some(Answer::TotalOrders {
        orders: input.context.total_orders,
    })
}

fn best_branch(input: &QueryInput) -> Option<Answer> {
    if !contains_any(
        &input.lowered,
        &["أحسن", "احسن", "a7san", "best", "top", "branch", "store", "فرع"],
    ) {
        return None;
    }
    let store = max_by_key(&input.context.store_performance, |s| s.progress)?;
    Some(Answer::BestBranch {
        store: store.name.clone(),
        sales: store.sales,
        progress: store.progress,
    })
}

fn branch_detail(input: &QueryInput) -> Option<Answer> {
    let store = Store::find_mention(&input.lowered)?;
    let perf = input.context.performance(store)?;
    Some(Answer::BranchDetail {
        store: perf.name.clone(),
        sales: perf.sales,
        orders: perf.orders,
        target: perf.target,
        progress: perf.progress,
    })
}

fn average_order(input: &QueryInput) -> Option<Answer> {
    if !contains_any(&input.lowered, &["average", "avg", "متوسط", "mtwst"]) {
        return None;
    }
    Some(Answer::AverageOrder {
        value: input.context.avg_order_value,
    })
}

fn help(_input: &QueryInput) -> Option<Answer> {
    Some(Answer::Help)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashboard_core::{aggregate, TransactionRecord};

    fn ctx() -> DashboardContext {
        let records = vec![
            TransactionRecord::new(d(5), Store::DarkStore, 200, 500_000.0),
            TransactionRecord::new(d(5), Store::Maadi, 150, 800_000.0),
            TransactionRecord::new(d(6), Store::Tagmo, 88, 120_000.0),
            TransactionRecord::new(d(6), Store::Heliopolis, 95, 130_000.0),
        ];
        aggregate(&records, &[])
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_rule_order_is_stable() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "greeting",
                "most_orders",
                "least_orders",
                "highest_sales",
                "lowest_sales",
                "target_gap",
                "temporal",
                "branch_order_count",
                "total_sales",
                "total_orders",
                "best_branch",
                "branch_detail",
                "average_order",
                "help",
            ]
        );
    }

    #[test]
    fn test_greeting_is_word_bounded() {
        let ctx = ctx();
        // "highest" contains "hi" but must not greet
        let reply = resolve("highest", &ctx);
        assert!(reply.starts_with("Highest sales branch"), "{}", reply);
        let greeting = resolve("hi", &ctx);
        assert!(greeting.contains("smart sales assistant"));
    }

    #[test]
    fn test_highest_names_maadi() {
        let reply = resolve("highest", &ctx());
        assert_eq!(reply, "Highest sales branch: Maadi with 800000 EGP");
    }

    #[test]
    fn test_lowest_sales() {
        let reply = resolve("lowest branch", &ctx());
        assert!(reply.contains("Tagmo"));
        assert!(reply.contains("120000"));
    }

    #[test]
    fn test_most_orders_beats_highest() {
        let reply = resolve("aktar branch 3amel orders?", &ctx());
        assert!(reply.contains("Dark store"));
        assert!(reply.contains("200"));
    }

    #[test]
    fn test_least_orders_via_a2al() {
        // "a2al" with an order token must hit least-orders, not lowest-sales
        let reply = resolve("a2al branch fel orders", &ctx());
        assert!(reply.contains("Tagmo"));
        assert!(reply.contains("88 order"), "{}", reply);
    }

    #[test]
    fn test_sales_tie_resolved_by_store_order() {
        let records = vec![
            TransactionRecord::new(d(1), Store::Tagmo, 10, 5_000.0),
            TransactionRecord::new(d(1), Store::Maadi, 10, 5_000.0),
        ];
        let ctx = aggregate(&records, &[]);
        let reply = resolve("highest", &ctx);
        // Tagmo comes before Maadi in fixed store order
        assert!(reply.contains("Tagmo"), "{}", reply);
    }

    #[test]
    fn test_day_query_with_branch() {
        let records = vec![
            TransactionRecord::new(d(5), Store::DarkStore, 25, 7_000.0),
            TransactionRecord::new(d(5), Store::DarkStore, 15, 5_000.0),
            TransactionRecord::new(d(5), Store::Maadi, 9, 1_000.0),
        ];
        let ctx = aggregate(&records, &[]);
        let reply = resolve("sales for dark store yom 5", &ctx);
        assert_eq!(
            reply,
            "Dark store on 2024-01-05:\n- Sales: 12000 EGP\n- Orders: 40"
        );
    }

    #[test]
    fn test_range_query_total() {
        let reply = resolve("total from 5 to 6", &ctx());
        assert!(reply.contains("from day 5 to 6"), "{}", reply);
        assert!(reply.contains("1550000"), "{}", reply);
        assert!(reply.contains("533"), "{}", reply);
    }

    #[test]
    fn test_marker_only_uses_latest_date() {
        let reply = resolve("sales today", &ctx());
        // Latest date in the set is Jan 6 (Tagmo + Heliopolis)
        assert!(reply.contains("2024-01-06"), "{}", reply);
        assert!(reply.contains("250000"), "{}", reply);
    }

    #[test]
    fn test_unmatched_day_falls_through() {
        // Day 20 has no records; the branch-detail rule answers instead
        let reply = resolve("dark yom 20", &ctx());
        assert!(reply.starts_with("Dark store:"), "{}", reply);
        assert!(reply.contains("Progress"), "{}", reply);
    }

    #[test]
    fn test_branch_order_count_phrasing() {
        let reply = resolve("3amel kam order fel tagmo", &ctx());
        assert_eq!(reply, "Tagmo 3amel 88 order le7ad delwa2ty");
    }

    #[test]
    fn test_total_sales_and_orders() {
        assert!(resolve("sales", &ctx()).contains("1550000"));
        assert!(resolve("how many orders", &ctx()).contains("533"));
    }

    #[test]
    fn test_best_branch_uses_progress_not_sales() {
        // Maadi: 800k / 700k target -> 100% progress; Dark store:
        // 500k / 1m -> 50% despite not having the most sales overall
        let reply = resolve("best branch", &ctx());
        assert!(reply.contains("Maadi"), "{}", reply);
        assert!(reply.contains("100.0%"), "{}", reply);
    }

    #[test]
    fn test_named_branch_detail() {
        let reply = resolve("tagmo?", &ctx());
        assert!(reply.starts_with("Tagmo:"));
        assert!(reply.contains("Target: 750000 EGP"));
    }

    #[test]
    fn test_average_order_value() {
        let reply = resolve("average", &ctx());
        let expected = 1_550_000.0 / 533.0;
        assert!(reply.contains(&format!("{:.0}", expected)));
    }

    #[test]
    fn test_default_help_in_english() {
        let reply = resolve("xyz123", &ctx());
        assert!(reply.starts_with("I can help you with"), "{}", reply);
    }

    #[test]
    fn test_default_help_in_arabic() {
        let reply = resolve("كلام غير مفهوم", &ctx());
        assert!(reply.contains("يمكنني مساعدتك"), "{}", reply);
    }

    #[test]
    fn test_arabic_target_gap() {
        let records = vec![
            TransactionRecord::new(d(1), Store::DarkStore, 450, 900_000.0),
            TransactionRecord::new(d(1), Store::Maadi, 450, 900_000.0),
        ];
        let ctx = aggregate(&records, &[]);
        let reply = resolve("ازاي أحقق الهدف؟", &ctx);
        // Remaining: Dark 100k + Tagmo 750k + Helio 1m + Maadi 0 = 1.85m
        assert!(reply.contains("1850000"), "{}", reply);
        assert!(reply.contains("جنيه"), "{}", reply);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let ctx = ctx();
        assert_eq!(resolve("a7san branch?", &ctx), resolve("a7san branch?", &ctx));
    }
}
