//! Response templates
//!
//! One template per (answer kind, language). The exhaustive match makes
//! missing language variants a compile error rather than a runtime gap.
//!
//! Franco templates render large monetary figures as colloquial "K"
//! amounts (÷1000) while Arabic and English render full integers. The
//! asymmetry is deliberate: Franco replies favor terse spoken figures.

use dashboard_core::ResponseLanguage;

/// A resolved intent with its computed values
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Greeting,
    HighestSales { store: String, sales: f64 },
    LowestSales { store: String, sales: f64 },
    MostOrders { store: String, orders: u32 },
    LeastOrders { store: String, orders: u32 },
    TargetGap { remaining: f64, orders_needed: u64, avg_order_value: f64 },
    DayTotal { label: String, sales: f64, orders: u32 },
    DayBranch { store: String, label: String, sales: f64, orders: u32 },
    RangeTotal { start: u32, end: u32, sales: f64, orders: u32 },
    RangeBranch { store: String, start: u32, end: u32, sales: f64, orders: u32 },
    BranchOrderCount { store: String, orders: u32 },
    TotalSales { sales: f64 },
    TotalOrders { orders: u32 },
    BestBranch { store: String, sales: f64, progress: f64 },
    BranchDetail { store: String, sales: f64, orders: u32, target: f64, progress: f64 },
    AverageOrder { value: f64 },
    Help,
}

/// Monetary figure in thousands with a K suffix, Franco style
fn franco_k(value: f64) -> String {
    format!("{:.0}K", value / 1000.0)
}

/// Render an answer in the selected language
pub fn render(answer: &Answer, lang: ResponseLanguage) -> String {
    use Answer::*;
    use ResponseLanguage::*;

    match answer {
        Greeting => match lang {
            Arabic => "مرحباً! أنا مساعدك الذكي للمبيعات. اسألني عن أي شيء تريد معرفته عن المبيعات، الطلبات، أو الأفرع.".to_string(),
            Franco => "Ahlan! Ana mosa3dak el zaky lel sales. Es2alni 3an ay 7aga 3aez t3rafha 3an el sales, orders, aw el branches.".to_string(),
            English => "Hello! I'm your smart sales assistant. Ask me anything about sales, orders, or branches.".to_string(),
        },

        HighestSales { store, sales } => match lang {
            Arabic => format!("أعلى فرع في المبيعات: {} بمبيعات {:.0} جنيه", store, sales),
            Franco => format!("A3la branch fel sales: {} be {} geneih", store, franco_k(*sales)),
            English => format!("Highest sales branch: {} with {:.0} EGP", store, sales),
        },

        LowestSales { store, sales } => match lang {
            Arabic => format!("أقل فرع في المبيعات: {} بمبيعات {:.0} جنيه", store, sales),
            Franco => format!("A2al branch fel sales: {} be {} geneih", store, franco_k(*sales)),
            English => format!("Lowest sales branch: {} with {:.0} EGP", store, sales),
        },

        MostOrders { store, orders } => match lang {
            Arabic => format!("أكثر فرع عامل أوردرات: {} بـ {} طلب", store, orders),
            Franco => format!("Aktar branch 3amel orders: {} be {} order", store, orders),
            English => format!("Most orders branch: {} with {} orders", store, orders),
        },

        LeastOrders { store, orders } => match lang {
            Arabic => format!("أقل فرع عامل أوردرات: {} بـ {} طلب", store, orders),
            Franco => format!("A2al branch 3amel orders: {} be {} order", store, orders),
            English => format!("Least orders branch: {} with {} orders", store, orders),
        },

        TargetGap { remaining, orders_needed, avg_order_value } => match lang {
            Arabic => format!(
                "لتحقيق الهدف محتاج:\n- {:.0} جنيه\n- حوالي {} طلب إضافي\n(بناءً على متوسط قيمة الطلب {:.0} جنيه)",
                remaining, orders_needed, avg_order_value
            ),
            Franco => format!(
                "3ashan t7a2a2 el target me7tag:\n- {} geneih\n- 7awaly {} order ziada\n(based 3ala avg order {:.0} geneih)",
                franco_k(*remaining), orders_needed, avg_order_value
            ),
            English => format!(
                "To achieve target you need:\n- {:.0} EGP\n- About {} more orders\n(Based on avg order value of {:.0} EGP)",
                remaining, orders_needed, avg_order_value
            ),
        },

        DayTotal { label, sales, orders } => match lang {
            Arabic => format!(
                "إجمالي يوم {}:\n- المبيعات: {:.0} جنيه\n- الأوردرات: {} طلب",
                label, sales, orders
            ),
            Franco => format!(
                "Egmaly yom {}:\n- El sales: {} geneih\n- El orders: {} order",
                label, franco_k(*sales), orders
            ),
            English => format!(
                "Total for {}:\n- Sales: {:.0} EGP\n- Orders: {}",
                label, sales, orders
            ),
        },

        DayBranch { store, label, sales, orders } => match lang {
            Arabic => format!(
                "{} يوم {}:\n- المبيعات: {:.0} جنيه\n- الأوردرات: {} طلب",
                store, label, sales, orders
            ),
            Franco => format!(
                "{} yom {}:\n- El sales: {} geneih\n- El orders: {} order",
                store, label, franco_k(*sales), orders
            ),
            English => format!(
                "{} on {}:\n- Sales: {:.0} EGP\n- Orders: {}",
                store, label, sales, orders
            ),
        },

        RangeTotal { start, end, sales, orders } => match lang {
            Arabic => format!(
                "إجمالي من يوم {} ليوم {}:\n- المبيعات: {:.0} جنيه\n- الأوردرات: {} طلب",
                start, end, sales, orders
            ),
            Franco => format!(
                "Egmaly men yom {} le yom {}:\n- El sales: {} geneih\n- El orders: {} order",
                start, end, franco_k(*sales), orders
            ),
            English => format!(
                "Total from day {} to {}:\n- Sales: {:.0} EGP\n- Orders: {}",
                start, end, sales, orders
            ),
        },

        RangeBranch { store, start, end, sales, orders } => match lang {
            Arabic => format!(
                "{} من يوم {} ليوم {}:\n- المبيعات: {:.0} جنيه\n- الأوردرات: {} طلب",
                store, start, end, sales, orders
            ),
            Franco => format!(
                "{} men yom {} le yom {}:\n- El sales: {} geneih\n- El orders: {} order",
                store, start, end, franco_k(*sales), orders
            ),
            English => format!(
                "{} from day {} to {}:\n- Sales: {:.0} EGP\n- Orders: {}",
                store, start, end, sales, orders
            ),
        },

        BranchOrderCount { store, orders } => match lang {
            Arabic => format!("{} عامل {} أوردر لحد دلوقتي", store, orders),
            Franco => format!("{} 3amel {} order le7ad delwa2ty", store, orders),
            English => format!("{} has made {} orders so far", store, orders),
        },

        TotalSales { sales } => match lang {
            Arabic => format!("إجمالي المبيعات: {:.0} جنيه مصري", sales),
            Franco => format!("Egmaly el sales: {} geneih masry", franco_k(*sales)),
            English => format!("Total Sales: {:.0} EGP", sales),
        },

        TotalOrders { orders } => match lang {
            Arabic => format!("إجمالي الطلبات: {} طلب", orders),
            Franco => format!("Egmaly el orders: {} order", orders),
            English => format!("Total Orders: {}", orders),
        },

        BestBranch { store, sales, progress } => match lang {
            Arabic => format!(
                "أفضل فرع: {} بمبيعات {:.0} جنيه ({:.1}٪ من الهدف)",
                store, sales, progress
            ),
            Franco => format!(
                "A7san branch: {} be sales {} geneih ({:.1}% men el target)",
                store, franco_k(*sales), progress
            ),
            English => format!(
                "Best Branch: {} with {:.0} EGP sales ({:.1}% of target)",
                store, sales, progress
            ),
        },

        BranchDetail { store, sales, orders, target, progress } => match lang {
            Arabic => format!(
                "{}:\n- المبيعات: {:.0} جنيه\n- الأوردرات: {} طلب\n- الهدف: {:.0} جنيه\n- التقدم: {:.1}٪",
                store, sales, orders, target, progress
            ),
            Franco => format!(
                "{}:\n- El sales: {} geneih\n- El orders: {} order\n- El target: {} geneih\n- Progress: {:.1}%",
                store, franco_k(*sales), orders, franco_k(*target), progress
            ),
            English => format!(
                "{}:\n- Sales: {:.0} EGP\n- Orders: {}\n- Target: {:.0} EGP\n- Progress: {:.1}%",
                store, sales, orders, target, progress
            ),
        },

        AverageOrder { value } => match lang {
            Arabic => format!("متوسط قيمة الطلب: {:.0} جنيه", value),
            Franco => format!("Motwast el order: {:.0} geneih", value),
            English => format!("Average Order Value: {:.0} EGP", value),
        },

        Help => match lang {
            Arabic => "يمكنني مساعدتك في معرفة:\n- المبيعات والطلبات\n- أفضل وأقل الأفرع\n- ما تحتاجه لتحقيق الأهداف\nاسأل عن أي شيء!".to_string(),
            Franco => "Momken asa3dak fe ma3refet:\n- El sales wel orders\n- A7san we a2al branches\n- Elly me7tag 3ashan t7a2a2 el target\nEs2al 3an ay 7aga!".to_string(),
            English => "I can help you with:\n- Sales and orders\n- Best and worst performing branches\n- What's needed to achieve targets\nAsk me anything!".to_string(),
        },
    }
}
