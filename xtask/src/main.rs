use camino::{Utf8Path, Utf8PathBuf};
use pictoplace::letter::Letter;
use pictoplace::motion::{
    Color, GridMode, Location, MotionDescriptor, MotionKind, MotionType, PictographContext,
    RotationDirection, Turns,
};
use pictoplace::placement::{DefaultPlacementKey, DefaultPlacementTable, SpecialPlacementTable};
use pictoplace::{EngineConfig, PictographPlacement, PlacementTables, Point, build_engine};
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  placement-report    Generate an HTML table of demo arrow placements");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "placement-report" => placement_report(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

/// Every non-float motion from every start to every end, one blue arrow each
fn demo_contexts() -> Vec<PictographContext> {
    let mut contexts = Vec::new();
    for &motion_type in MotionType::ALL {
        let Ok(kind) = MotionKind::try_from(motion_type) else {
            continue;
        };
        for &rotation in RotationDirection::ALL {
            for &start in Location::ALL {
                for &end in Location::ALL {
                    let Ok(motion) = MotionDescriptor::new(kind, rotation, start, end) else {
                        continue;
                    };
                    contexts.push(
                        PictographContext::new(Letter::A, GridMode::Diamond)
                            .with_motion(Color::Blue, motion),
                    );
                }
            }
        }
    }
    contexts
}

/// One default adjustment per motion type and rotation, none for turned motions
fn demo_tables() -> PlacementTables {
    let defaults: DefaultPlacementTable = MotionType::ALL
        .iter()
        .flat_map(|&motion_type| {
            RotationDirection::ALL.iter().map(move |&rotation| {
                (
                    DefaultPlacementKey::new(motion_type, rotation, Turns::ZERO),
                    Point::new(20.0, -10.0),
                )
            })
        })
        .collect();
    PlacementTables::new(SpecialPlacementTable::new(), defaults)
}

fn placement_report() {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    let output_path: Utf8PathBuf = manifest_dir.join("../placement-report.html");

    let config = EngineConfig::default();
    let engine = build_engine(demo_tables(), &config);
    let contexts = demo_contexts();

    eprintln!("Placing {} pictographs...", contexts.len());
    let placements = engine.place_batch(&contexts);

    let rows: Vec<String> = contexts
        .par_iter()
        .zip(placements.par_iter())
        .filter_map(|(context, placement)| render_row(context, placement))
        .collect();

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Arrow Placements</title>
    <style>
        body {{
            font-family: system-ui, sans-serif;
            margin: 24px;
            background: #eee;
            color: #333;
        }}
        h1 {{
            font-weight: 600;
            font-size: 20px;
        }}
        table {{
            border-collapse: collapse;
            background: white;
            font-size: 12px;
        }}
        th, td {{
            padding: 4px 10px;
            border-bottom: 1px solid #eee;
            text-align: left;
        }}
        th {{
            background: #fafafa;
            font-weight: 600;
        }}
        td.num {{
            font-family: 'SF Mono', Monaco, monospace;
            text-align: right;
        }}
    </style>
</head>
<body>
<h1>Arrow Placements ({} pictographs, scene {}, center {})</h1>
<table>
<tr><th>type</th><th>rotation</th><th>start</th><th>end</th><th>x</th><th>y</th><th>angle</th></tr>
"#,
        contexts.len(),
        config.scene_size(),
        html_escape(&config.center().to_string()),
    ));
    for row in &rows {
        html.push_str(row);
    }
    html.push_str("</table>\n</body></html>");

    fs::write(&output_path, html).expect("Failed to write HTML");
    println!("Generated placement report at: {output_path}");
}

fn render_row(context: &PictographContext, placement: &PictographPlacement) -> Option<String> {
    let motion = context.motion(Color::Blue)?;
    let arrow = placement.get(Color::Blue)?;
    Some(format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{:.2}</td><td class=\"num\">{:.2}</td><td class=\"num\">{}</td></tr>\n",
        motion.motion_type(),
        motion.rotation_direction(),
        motion.start_location(),
        motion.end_location(),
        arrow.position.x,
        arrow.position.y,
        html_escape(&arrow.rotation.to_string()),
    ))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
