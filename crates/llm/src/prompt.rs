//! Prompt construction for the hosted model
//!
//! The context summary is a deterministic bilingual rendering of the
//! dashboard snapshot; the system prompt carries the language-mirroring
//! instructions the assistant must follow.

use dashboard_core::DashboardContext;

/// Fixed bilingual rendering of the dashboard snapshot
///
/// Totals plus one line per branch, Arabic labels alongside English. Sent
/// verbatim with every request so the hosted model answers from real data.
pub fn context_summary(context: &DashboardContext) -> String {
    let mut out = String::new();

    out.push_str("**Current Dashboard Data:**\n");
    out.push_str(&format!(
        "- Total Sales: {:.0} EGP (إجمالي المبيعات)\n",
        context.total_sales
    ));
    out.push_str(&format!(
        "- Total Orders: {} (إجمالي الطلبات)\n",
        context.total_orders
    ));
    out.push_str(&format!(
        "- Avg Order Value: {:.0} EGP (متوسط قيمة الطلب)\n",
        context.avg_order_value
    ));

    out.push_str("\n**Store Performance:**\n");
    for store in &context.store_performance {
        out.push_str(&format!(
            "- {}: {:.0} EGP ({} orders, {:.1}% of target {:.0} EGP)\n",
            store.name, store.sales, store.orders, store.progress, store.target
        ));
    }

    out
}

/// System prompt for the Gemini call
///
/// Instructs the model to mirror the question's language (Arabic script,
/// Franco-Arabic, or English) and answer from the embedded snapshot only.
pub fn system_prompt(context: &DashboardContext) -> String {
    format!(
        r#"أنت مساعد ذكي لنظام إدارة المبيعات لشركة cstore.
You are an AI assistant for cstore's sales dashboard.

**CRITICAL INSTRUCTIONS:**
1. DETECT the language the user is asking in and respond ONLY in that SAME language
2. If user asks in Arabic (العربية) → respond in Arabic ONLY
3. If user asks in Franco-Arabic (Arabizi like "3aez" or "eh") → respond in Franco-Arabic ONLY
4. If user asks in English → respond in English ONLY
5. Use the dashboard data provided to answer questions accurately
6. Be conversational and helpful
7. For Franco-Arabic, use numbers for Arabic letters (3=ع, 2=أ, 7=ح, 5=خ, 8=ق, 9=ص, 6=ط)

**Store Information:**
- Dark Store (الفرع المظلم)
- Heliopolis (فرع مصر الجديدة)
- Tagmo (فرع التجمع)
- Maadi (فرع المعادي)

{summary}
**REMEMBER:**
- Respond in the SAME language as the user's question
- If they greet you, greet them back and ask what they want to know
- Match their language style exactly"#,
        summary = context_summary(context),
    )
}
