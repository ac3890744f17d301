//! Web routes.

use axum::{
    Router,
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::services::ServeDir;
use tracing::info;

use hindsight_core::{
    CATALOG, MIN_GRADUATION_YEAR, QueryError, QueryResult, ResultFact, SchoolWindow,
    TimingCategory, current_year, parse_graduation_year, run_query,
};

/// Create the web router.
pub fn create_router(static_dir: Option<&str>) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/results", get(results_page))
        .route("/api/query", get(api_query))
        .route("/health", get(health));

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
}

#[derive(Deserialize)]
struct ResultsQuery {
    year: Option<String>,
}

/// Parse and validate the year parameter, then run the catalog query.
fn query_from_param(year: Option<&str>) -> Result<QueryResult, QueryError> {
    let year = parse_graduation_year(year.unwrap_or(""))?;
    run_query(CATALOG, year, current_year())
}

async fn index() -> impl IntoResponse {
    Html(render_index(None))
}

async fn results_page(Query(query): Query<ResultsQuery>) -> impl IntoResponse {
    match query_from_param(query.year.as_deref()) {
        Ok(result) => {
            info!(
                graduation_year = result.graduation_year,
                count = result.facts.len(),
                "served results page"
            );
            Html(render_results(&result))
        }
        // Validation failure: back to the form with the message; no result
        // markup is rendered.
        Err(e) => Html(render_index(Some(&e.to_string()))),
    }
}

async fn api_query(Query(query): Query<ResultsQuery>) -> Response {
    match query_from_param(query.year.as_deref()) {
        Ok(result) => Json(result).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "catalog_size": CATALOG.len(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// =============================================================================
// Rendering
// =============================================================================

fn render_index(error: Option<&str>) -> String {
    let error_html = error
        .map(|msg| format!(r#"<p class="error">{}</p>"#, html_escape(msg)))
        .unwrap_or_default();

    INDEX_HTML
        .replace("<!-- ERROR -->", &error_html)
        .replace("<!-- MIN_YEAR -->", &MIN_GRADUATION_YEAR.to_string())
        .replace("<!-- MAX_YEAR -->", &current_year().to_string())
}

fn render_results(result: &QueryResult) -> String {
    let mut facts_html = String::new();
    for f in &result.facts {
        facts_html.push_str(&render_fact_card(f, result.window));
    }

    RESULTS_HTML
        .replace("<!-- GRAD_YEAR -->", &result.graduation_year.to_string())
        .replace("<!-- START_YEAR -->", &result.window.start_year.to_string())
        .replace("<!-- END_YEAR -->", &result.window.end_year.to_string())
        .replace("<!-- COUNT -->", &result.facts.len().to_string())
        .replace("<!-- OVERALL -->", &render_overall_timeline(result))
        .replace("<!-- FACTS -->", &facts_html)
}

/// The all-facts timeline: the school-years band plus one dot per
/// correction, normalized over a span that stretches to cover outlier
/// change years. Empty for an empty result set.
fn render_overall_timeline(result: &QueryResult) -> String {
    let Some(agg) = result.aggregate_timeline() else {
        return String::new();
    };

    let start_pos = agg.position(result.window.start_year) * 100.0;
    let end_pos = agg.position(result.window.end_year) * 100.0;
    let band_width = end_pos - start_pos;

    let mut dots = String::new();
    for f in &result.facts {
        let pos = agg.position(f.fact.changed_year) * 100.0;
        dots.push_str(&format!(
            r#"<div class="dot" style="left:{pos:.1}%" title="{} - {}"></div>"#,
            html_escape(&f.fact.subject.to_string()),
            f.fact.changed_year
        ));
    }

    format!(
        r#"<div class="overall">
        <h3>Timeline of Changes</h3>
        <div class="track">
            <div class="band" style="left:{start_pos:.1}%;width:{band_width:.1}%"></div>
            {dots}
        </div>
        <div class="track-labels">
            <span style="left:{start_pos:.1}%"><strong>{start}</strong> Started</span>
            <span style="left:{end_pos:.1}%"><strong>{end}</strong> Graduated</span>
        </div>
        <div class="legend">
            <span><span class="swatch band-swatch"></span> Your school years</span>
            <span><span class="swatch dot-swatch"></span> Fact changed</span>
        </div>
    </div>"#,
        start = result.window.start_year,
        end = result.window.end_year,
    )
}

fn render_fact_card(f: &ResultFact, window: SchoolWindow) -> String {
    let (timing_text, timing_class) = timing_label(f, window);

    // Marker hidden when the change falls outside the display horizon.
    let marker_html = f
        .marker
        .map(|pos| {
            format!(
                r#"<div class="marker" style="left:{:.1}%"><span class="marker-year">{}</span></div>"#,
                pos * 100.0,
                f.fact.changed_year
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card">
        <div class="card-header">
            <span class="badge {subject_class}">{subject}</span>
            <span class="updated">Updated {changed}</span>
        </div>
        <p class="label"><span class="mark wrong">✗</span> What you learned:</p>
        <p class="claim">{claim}</p>
        <p class="label"><span class="mark right">✓</span> What we know now:</p>
        <p class="correction">{correction}</p>
        <div class="mini-timeline">
            <div class="mini-header">
                <span>Your school years</span>
                <span class="timing {timing_class}">{timing_text}</span>
            </div>
            <div class="mini-track">
                <span class="edge">{start}</span>
                {marker_html}
                <span class="edge right">{end}</span>
            </div>
        </div>
    </div>"#,
        subject_class = f.fact.subject.css_class(),
        subject = html_escape(&f.fact.subject.to_string()),
        changed = f.fact.changed_year,
        claim = html_escape(f.fact.claim),
        correction = html_escape(f.fact.correction),
        timing_class = timing_class,
        timing_text = html_escape(&timing_text),
        start = window.start_year,
        end = window.end_year,
    )
}

/// Human label for when the correction landed relative to the school years.
fn timing_label(f: &ResultFact, window: SchoolWindow) -> (String, &'static str) {
    match f.timing {
        TimingCategory::BeforeSchool => ("Before you started".to_string(), "before"),
        TimingCategory::DuringSchool => (
            format!(
                "Year {} of school",
                f.fact.changed_year - window.start_year + 1
            ),
            "during",
        ),
        TimingCategory::AfterSchool => {
            let years_after = f.fact.changed_year - window.end_year;
            let label = if years_after == 1 {
                "1 year after graduation".to_string()
            } else {
                format!("{} years after graduation", years_after)
            };
            (label, "after")
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Hindsight</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
            background: #0a0a0a;
            color: #e0e0e0;
        }
        h1 { color: #88c0d0; }
        a { color: #81a1c1; }
        .intro { color: #a0a0a0; max-width: 600px; }
        form {
            margin: 2rem 0;
            padding: 1.5rem;
            background: #161616;
            border-radius: 8px;
            max-width: 400px;
        }
        label { display: block; margin-bottom: 0.5rem; font-weight: 600; }
        input[type="number"] {
            width: 100%;
            padding: 0.6rem;
            font-size: 1.1rem;
            background: #0a0a0a;
            color: #e0e0e0;
            border: 1px solid #3b4252;
            border-radius: 4px;
            box-sizing: border-box;
        }
        button {
            margin-top: 1rem;
            width: 100%;
            padding: 0.6rem;
            font-size: 1rem;
            font-weight: 600;
            background: #5e81ac;
            color: #eceff4;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }
        button:hover { background: #81a1c1; }
        .error { color: #bf616a; font-weight: 600; }
        footer { margin-top: 3rem; color: #606060; font-size: 0.85rem; }
    </style>
</head>
<body>
    <h1>Hindsight</h1>
    <p class="intro">
        Science evolves. Knowledge changes. Enter your high school graduation
        year to discover which "facts" you were taught that have since been
        updated or disproven.
    </p>
    <!-- ERROR -->
    <form action="/results" method="get">
        <label for="year">High School Graduation Year</label>
        <input type="number" id="year" name="year" placeholder="e.g., 2005"
               min="<!-- MIN_YEAR -->" max="<!-- MAX_YEAR -->" autofocus>
        <button type="submit">Show Me What Changed</button>
    </form>
    <footer>Knowledge evolves. Stay curious. Keep learning.</footer>
</body>
</html>"#;

const RESULTS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Hindsight - Class of <!-- GRAD_YEAR --></title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
            background: #0a0a0a;
            color: #e0e0e0;
        }
        h1, h2 { color: #88c0d0; }
        h3 { color: #81a1c1; }
        a { color: #81a1c1; }
        .summary { color: #a0a0a0; }
        .overall {
            margin: 2rem 0;
            padding: 1.5rem;
            background: #161616;
            border-radius: 8px;
        }
        .track {
            position: relative;
            height: 8px;
            margin: 2.5rem 0.5rem 1rem;
            background: #2e3440;
            border-radius: 4px;
        }
        .band {
            position: absolute;
            top: 0;
            height: 8px;
            background: #5e81ac;
            border-radius: 4px;
        }
        .dot {
            position: absolute;
            top: -3px;
            width: 14px;
            height: 14px;
            margin-left: -7px;
            background: #bf616a;
            border: 2px solid #0a0a0a;
            border-radius: 50%;
        }
        .track-labels { position: relative; height: 2.5rem; font-size: 0.8rem; color: #a0a0a0; }
        .track-labels span { position: absolute; transform: translateX(-50%); white-space: nowrap; }
        .legend { display: flex; gap: 1.5rem; font-size: 0.85rem; color: #a0a0a0; }
        .swatch { display: inline-block; width: 12px; height: 12px; border-radius: 3px; vertical-align: middle; }
        .band-swatch { background: #5e81ac; }
        .dot-swatch { background: #bf616a; border-radius: 50%; }
        .card {
            margin: 1.5rem 0;
            padding: 1.5rem;
            background: #161616;
            border-radius: 8px;
        }
        .card-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
        .updated { color: #808080; font-size: 0.9rem; }
        .badge {
            padding: 0.25rem 0.75rem;
            border-radius: 999px;
            font-size: 0.85rem;
            font-weight: 600;
        }
        .badge.astronomy { background: #3b2e58; color: #b48ead; }
        .badge.biology { background: #2e4034; color: #a3be8c; }
        .badge.paleontology { background: #4a3828; color: #d08770; }
        .badge.health { background: #4a2c30; color: #bf616a; }
        .badge.neuroscience { background: #46303f; color: #c792b5; }
        .badge.medicine { background: #2b3a50; color: #81a1c1; }
        .badge.chemistry { background: #26413e; color: #8fbcbb; }
        .badge.history { background: #4a4228; color: #ebcb8b; }
        .badge.genetics { background: #323a58; color: #9aa8d8; }
        .badge.geography { background: #28424a; color: #88c0d0; }
        .badge.general { background: #2e3440; color: #d8dee9; }
        .label { font-weight: 600; margin-bottom: 0.25rem; }
        .mark.wrong { color: #bf616a; }
        .mark.right { color: #a3be8c; }
        .claim { margin: 0 0 1rem 1.5rem; color: #a0a0a0; text-decoration: line-through; }
        .correction { margin: 0 0 1rem 1.5rem; }
        .mini-timeline { margin-top: 1rem; padding-top: 1rem; border-top: 1px solid #2e3440; }
        .mini-header { display: flex; justify-content: space-between; font-size: 0.8rem; color: #a0a0a0; margin-bottom: 1.5rem; }
        .timing { font-weight: 600; }
        .timing.before { color: #808080; }
        .timing.during { color: #d08770; }
        .timing.after { color: #81a1c1; }
        .mini-track {
            position: relative;
            height: 32px;
            background: linear-gradient(to right, #2b3a50, #3b2e58);
            border-radius: 6px;
        }
        .mini-track .edge {
            position: absolute;
            top: 8px;
            left: 8px;
            font-size: 0.75rem;
            font-weight: 600;
            color: #a0a0a0;
        }
        .mini-track .edge.right { left: auto; right: 8px; }
        .marker {
            position: absolute;
            top: 0;
            bottom: 0;
            width: 3px;
            margin-left: -1px;
            background: #bf616a;
        }
        .marker-year {
            position: absolute;
            top: -1.4rem;
            left: 50%;
            transform: translateX(-50%);
            padding: 0.1rem 0.4rem;
            background: #bf616a;
            color: #eceff4;
            font-size: 0.75rem;
            font-weight: 600;
            border-radius: 4px;
            white-space: nowrap;
        }
        .actions { margin: 2rem 0; text-align: center; }
        .share {
            padding: 0.6rem 1.5rem;
            background: #2e3440;
            color: #d8dee9;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }
        .share:hover { background: #3b4252; }
        footer { margin-top: 3rem; color: #606060; font-size: 0.85rem; text-align: center; }
    </style>
</head>
<body>
    <h1>Class of <!-- GRAD_YEAR --></h1>
    <p class="summary">
        We found <!-- COUNT --> outdated "facts" from your school years
        (<!-- START_YEAR -->-<!-- END_YEAR -->).
    </p>
    <p><a href="/">&larr; Try another year</a></p>
    <!-- OVERALL -->
    <!-- FACTS -->
    <div class="actions">
        <button class="share" onclick="alert('Share functionality would go here!')">Share Your Results</button>
    </div>
    <footer>Knowledge evolves. Stay curious. Keep learning.</footer>
</body>
</html>"#;
