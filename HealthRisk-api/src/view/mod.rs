//! HTML rendering of the assessment page
//!
//! The page is a single self-contained document: the input form, the result
//! card, the factor chart and the action buttons. It is re-rendered from
//! scratch for every request.

pub mod chart;

use health_risk_domain::entities::assessment::{
    ActivityLevel, AdviceSeverity, AssessmentInput, AssessmentResult, Gender, SmokingStatus,
};
use health_risk_domain::services::report::format_decimal;

/// Raw form field values, echoed back into the inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub age: String,
    pub gender: String,
    pub weight_kg: String,
    pub height_cm: String,
    pub systolic_bp: String,
    pub blood_sugar: String,
    pub activity: String,
    pub smoking: String,
}

impl From<&AssessmentInput> for FormValues {
    fn from(input: &AssessmentInput) -> Self {
        FormValues {
            age: input.age.to_string(),
            gender: input.gender.to_string(),
            weight_kg: input.weight_kg.to_string(),
            height_cm: input.height_cm.to_string(),
            systolic_bp: input.systolic_bp.to_string(),
            blood_sugar: input.blood_sugar.to_string(),
            activity: input.activity.to_string(),
            smoking: input.smoking.to_string(),
        }
    }
}

/// Everything the page template needs
#[derive(Debug)]
pub struct PageModel<'a> {
    /// Values shown in the form
    pub form: &'a FormValues,
    /// Assessment of the submitted values, absent when they were rejected
    pub result: Option<&'a AssessmentResult>,
    /// Validation messages for rejected values
    pub errors: &'a [String],
    /// Whether the doctor visit advice was requested
    pub show_visit_advice: bool,
    /// Download link of the text report
    pub report_url: Option<String>,
}

/// Render the full assessment page
pub fn render_page(model: &PageModel<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI Health Risk Predictor</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        <form method="get" action="/">
            <div class="columns">
                {form}
                {result}
            </div>
            {chart}
            {actions}
        </form>
        {footer}
    </div>
</body>
</html>"#,
        css = inline_css(),
        header = render_header(),
        form = render_form_card(model.form, model.errors),
        result = render_result_card(model.result),
        chart = model.result.map(render_chart_section).unwrap_or_default(),
        actions = render_actions(model),
        footer = render_footer(),
    )
}

fn render_header() -> &'static str {
    r#"<header>
            <h1>🩺 AI-Based Early Health Risk Prediction System</h1>
            <p class="caption">Preventive Healthcare using AI | AI For Good Hackathon</p>
        </header>"#
}

fn render_footer() -> &'static str {
    r#"<footer><p class="caption">AI For Good Hackathon | Doctor-Themed Preventive Healthcare Prototype</p></footer>"#
}

fn render_form_card(form: &FormValues, errors: &[String]) -> String {
    let error_list = if errors.is_empty() {
        String::new()
    } else {
        let items: String = errors
            .iter()
            .map(|e| format!("<li>{}</li>", html_escape(e)))
            .collect();
        format!(r#"<ul class="errors">{}</ul>"#, items)
    };

    format!(
        r#"<section class="column">
                <h2>👤 User Health Information</h2>
                <div class="card">
                    {errors}
                    {age}
                    {gender}
                    {weight}
                    {height}
                    {bp}
                    {sugar}
                    {activity}
                    {smoking}
                </div>
            </section>"#,
        errors = error_list,
        age = number_field("age", "Age (Years)", &form.age, 10, 90),
        gender = select_field("gender", "Gender", &form.gender, &Gender::ALL.map(|g| g.as_str())),
        weight = number_field("weight_kg", "Weight (kg)", &form.weight_kg, 30, 150),
        height = number_field("height_cm", "Height (cm)", &form.height_cm, 120, 210),
        bp = number_field("systolic_bp", "Blood Pressure – Systolic", &form.systolic_bp, 80, 200),
        sugar = number_field("blood_sugar", "Blood Sugar Level (mg/dL)", &form.blood_sugar, 70, 300),
        activity = select_field(
            "activity",
            "Physical Activity Level",
            &form.activity,
            &ActivityLevel::ALL.map(|a| a.as_str())
        ),
        smoking = select_field("smoking", "Smoking Habit", &form.smoking, &SmokingStatus::ALL.map(|s| s.as_str())),
    )
}

fn number_field(name: &str, label: &str, value: &str, min: u32, max: u32) -> String {
    format!(
        r#"<label for="{name}">{label}</label><input type="number" id="{name}" name="{name}" min="{min}" max="{max}" step="1" value="{value}">"#,
        name = name,
        label = html_escape(label),
        min = min,
        max = max,
        value = html_escape(value),
    )
}

fn select_field(name: &str, label: &str, selected: &str, options: &[&str]) -> String {
    let options: String = options
        .iter()
        .map(|option| {
            let marker = if option.eq_ignore_ascii_case(selected.trim()) { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, option, marker)
        })
        .collect();

    format!(
        r#"<label for="{name}">{label}</label><select id="{name}" name="{name}">{options}</select>"#,
        name = name,
        label = html_escape(label),
        options = options,
    )
}

fn render_result_card(result: Option<&AssessmentResult>) -> String {
    let body = match result {
        Some(result) => {
            let factors = if result.triggered_factors.is_empty() {
                String::from("<p><strong>Contributing Factors:</strong> none</p>")
            } else {
                let items: String = result
                    .triggered_factors
                    .iter()
                    .map(|f| format!("<li>{}</li>", f.description()))
                    .collect();
                format!("<p><strong>Contributing Factors:</strong></p><ul>{}</ul>", items)
            };

            format!(
                r#"<p><strong>BMI:</strong> {bmi}</p>
                    <p><strong>BMI Status:</strong> {status}</p>
                    <p class="risk {class}" style="color: {color}">Risk Level: {label}</p>
                    <p><strong>Condition Summary:</strong> {summary}</p>
                    <p><strong>Medical Guidance:</strong> {advice}</p>
                    {factors}"#,
                bmi = format_decimal(result.bmi),
                status = result.bmi_status,
                class = result.risk_tier.label().to_lowercase(),
                color = result.risk_tier.color(),
                label = result.risk_tier.label(),
                summary = html_escape(&result.condition_summary),
                advice = html_escape(&result.advice),
                factors = factors,
            )
        }
        None => String::from(r#"<p class="muted">Correct the highlighted values to see your assessment.</p>"#),
    };

    format!(
        r#"<section class="column">
                <h2>🧠 AI Health Assessment Result</h2>
                <div class="card">
                    {body}
                </div>
            </section>"#,
        body = body,
    )
}

fn render_chart_section(result: &AssessmentResult) -> String {
    format!(
        r#"<section>
                <h2>📊 Health Risk Factor Analysis (Live)</h2>
                <div class="card chart">{svg}</div>
            </section>"#,
        svg = chart::render_factor_chart(&result.chart(), result.chart_upper_bound()),
    )
}

fn render_actions(model: &PageModel<'_>) -> String {
    let advice = match (model.show_visit_advice, model.result) {
        (true, Some(result)) => {
            let advice = result.risk_tier.visit_advice();
            format!(
                r#"<p class="notice {class}">{message}</p>"#,
                class = severity_class(advice.severity),
                message = html_escape(&advice.message),
            )
        }
        _ => String::new(),
    };

    let download = match &model.report_url {
        Some(url) => format!(r#"<a class="button" href="{}">📄 Download Health Report</a>"#, html_escape(url)),
        None => String::new(),
    };

    format!(
        r#"<section>
                <h2>🛠️ Actions</h2>
                <div class="actions">
                    <button type="submit">🔄 Recheck Health Risk</button>
                    <button type="submit" name="advice" value="1">🩺 Doctor Visit Advice</button>
                    {download}
                </div>
                {advice}
            </section>"#,
        download = download,
        advice = advice,
    )
}

fn severity_class(severity: AdviceSeverity) -> &'static str {
    match severity {
        AdviceSeverity::Success => "success",
        AdviceSeverity::Warning => "warning",
        AdviceSeverity::Error => "error",
    }
}

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: #f1f9ff;
    background: linear-gradient(135deg, #0f2027, #203a43, #2c5364);
    min-height: 100vh;
}
.container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
h1, h2, h3 { color: #f1f9ff; }
.caption { color: #cfd8dc; font-size: 0.875rem; }
.columns { display: grid; grid-template-columns: 1.2fr 1fr; gap: 1.5rem; }
.card {
    background-color: rgba(255, 255, 255, 0.97);
    color: black;
    padding: 20px;
    border-radius: 14px;
    box-shadow: 0 8px 20px rgba(0,0,0,0.35);
    margin-bottom: 15px;
}
.card label { display: block; margin-top: 0.75rem; font-weight: 600; }
.card input, .card select { width: 100%; padding: 0.4rem; margin-top: 0.25rem; }
.chart { overflow-x: auto; }
.risk { font-size: 22px; font-weight: bold; }
.errors { color: #e74c3c; }
.muted { color: #6b7280; }
.actions { display: flex; gap: 1rem; flex-wrap: wrap; }
button, .button {
    background: linear-gradient(135deg, #1abc9c, #16a085);
    color: white;
    border-radius: 12px;
    height: 45px;
    padding: 0 1.25rem;
    font-size: 16px;
    border: none;
    text-decoration: none;
    display: inline-flex;
    align-items: center;
    cursor: pointer;
}
button:hover, .button:hover { background: linear-gradient(135deg, #16a085, #149174); }
.notice { padding: 0.75rem 1rem; border-radius: 8px; font-weight: 600; }
.notice.success { background: #d4edda; color: #155724; }
.notice.warning { background: #fff3cd; color: #856404; }
.notice.error { background: #f8d7da; color: #721c24; }
"#
}

/// Escape text for safe inclusion in HTML
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
