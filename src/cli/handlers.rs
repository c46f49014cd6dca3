use std::io::stderr;

use crate::{
    LineChart,
    core::{
        color::{AnsiCode, colorize},
        config::{ChartConfig, Mode},
        data::read_csv_from_path,
        error::ChartError,
        rng::Lcg,
        series::Series,
        trace::WriterTrace,
    },
    render::{Screen, terminal_inner},
};

use super::parse::{CsvArgs, DemoArgs};

/// Per-series colours when the input carries more than one column.
const PALETTE: [AnsiCode; 6] = [
    AnsiCode::green(),
    AnsiCode::cyan(),
    AnsiCode::magenta(),
    AnsiCode::yellow(),
    AnsiCode::blue(),
    AnsiCode::red(),
];

pub fn csv(a: CsvArgs) -> Result<(), ChartError> {
    let mut series = read_csv_from_path(&a.file)?;

    // one column keeps --color; several cycle the palette so the lines
    // stay distinguishable
    if series.len() > 1 {
        for (i, (_, s)) in series.iter_mut().enumerate() {
            if s.color.is_none() {
                s.color = Some(PALETTE[i % PALETTE.len()]);
            }
        }
    }

    let mut b = ChartConfig::builder()
        .mode(Mode::from_name(&a.mode)?)
        .line_color(AnsiCode::from_name(&a.color)?)
        .axes_color(AnsiCode::from_name(&a.axes_color)?)
        .y_padding(a.y_padding)
        .dot_glyph(a.dot_glyph);
    if let Some(f) = a.y_floor {
        b = b.y_floor(f);
    }
    if let Some(c) = a.y_ceil {
        b = b.y_ceil(c);
    }
    if let Some(l) = &a.labels {
        b = b.data_labels(l.split(',').map(str::trim));
    }
    let cfg = b.build()?;

    let mut chart = LineChart::new(cfg).with_series(series);
    if a.debug {
        chart = chart.with_trace(Box::new(WriterTrace::new(stderr())));
    }

    let inner = terminal_inner();
    let frame = chart.render(&inner);
    Screen::new().draw(&a.title, &inner, &frame)
}

pub fn demo(a: &DemoArgs) -> Result<(), ChartError> {
    let mut rng = Lcg::seed_from_time();

    let cfg = ChartConfig::builder().mode(Mode::from_name(&a.mode)?).build()?;
    let mut chart = LineChart::new(cfg);
    if a.debug {
        chart = chart.with_trace(Box::new(WriterTrace::new(stderr())));
    }
    chart
        .series_mut()
        .insert("fast", Series::new(vec![0.0]).with_color(AnsiCode::cyan()));
    chart
        .series_mut()
        .insert("slow", Series::new(vec![0.0]).with_color(AnsiCode::magenta()));

    let frame_pause = std::time::Duration::from_micros(1_000_000 / a.fps.max(1));
    let mut screen = Screen::new();
    let (mut fast, mut slow) = (0.0_f64, 0.0_f64);

    for _ in 1..a.steps {
        fast += a.mu.mul_add(a.dt, a.sigma * rng.randn() * a.dt.sqrt());
        slow += a.mu.mul_add(a.dt, 0.4 * a.sigma * rng.randn() * a.dt.sqrt());

        // terminal geometry – recalc every frame (handles resizes)
        let inner = terminal_inner();
        let keep = usize::try_from(inner.dx()).unwrap_or(0)
            * chart.config().mode.samples_per_column();

        for (name, v) in [("fast", fast), ("slow", slow)] {
            if let Some(s) = chart.series_mut().get_mut(name) {
                s.push(v);
                s.truncate_front(keep.max(1));
            }
        }

        let frame = chart.render(&inner);
        screen.draw("Brownian Motion", &inner, &frame)?;
        std::thread::sleep(frame_pause);
    }
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    println!("{}", colorize(&AnsiCode::black(), "black"));
    println!("{}", colorize(&AnsiCode::red(), "red"));
    println!("{}", colorize(&AnsiCode::green(), "green"));
    println!("{}", colorize(&AnsiCode::yellow(), "yellow"));
    println!("{}", colorize(&AnsiCode::blue(), "blue"));
    println!("{}", colorize(&AnsiCode::magenta(), "magenta"));
    println!("{}", colorize(&AnsiCode::cyan(), "cyan"));
    println!("{}", colorize(&AnsiCode::white(), "white"));
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Basic CSV        : {bin} csv metrics.csv
• Dot mode         : {bin} csv metrics.csv --mode dot
• Named color      : {bin} csv metrics.csv --color blue
• Hex color        : {bin} csv metrics.csv --color #6048c1
• Clamped y axis   : {bin} csv metrics.csv --y-floor 0 --y-ceil 100
• Custom labels    : {bin} csv metrics.csv --labels mon,tue,wed,thu,fri
• Debug trace      : {bin} csv metrics.csv --debug
• Brownian \"video\" : {bin} demo --steps 2000 --sigma 0.7 --fps 25
"
    );
}
