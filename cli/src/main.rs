//! Interactive terminal front-end for the marquee catalog.

use chrono::Utc;
use marquee_core::MarqueeCore;
use marquee_core::core::upload::{self, SelectedFile, TickOutcome, UploadForm, UploadTask};
use marquee_core::core::view::{self, PageStep, PageView};
use marquee_core::types::{Config, Session};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    let base_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("marquee-data"));

    let mut app = match MarqueeCore::open(Config { base_path }, Utc::now()) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to open catalog: {err}");
            std::process::exit(1);
        }
    };

    println!("marquee — movie catalog");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let page = app.render();
        draw(&page, app.session(), app.is_administrator());

        let Some(line) = read_line(&mut lines, "> ") else {
            break;
        };
        let mut words = line.split_whitespace();

        match words.next() {
            Some("login") => {
                let email = words.next().unwrap_or_default();
                match app.sign_in(email) {
                    Ok(session) => println!("Signed in as {}.", session.display_name),
                    Err(err) => println!("{err}"),
                }
            }
            Some("logout") => {
                if app.session().is_none() {
                    println!("Not signed in.");
                    continue;
                }
                let Some(answer) = read_line(&mut lines, "Are you sure you want to sign out? [y/N] ")
                else {
                    break;
                };
                if answer.trim().eq_ignore_ascii_case("y") {
                    match app.sign_out() {
                        Ok(()) => println!("Signed out."),
                        Err(err) => println!("{err}"),
                    }
                }
            }
            Some("next") => {
                app.go_to_page(PageStep::Next);
            }
            Some("prev") => {
                app.go_to_page(PageStep::Prev);
            }
            Some("add") => run_add(&mut app, &mut lines),
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("Unknown command: {other}. Type 'help' for commands."),
            None => {}
        }
    }
}

fn print_help() {
    println!(
        "commands: login <email> | logout | prev | next | add | help | quit"
    );
}

fn draw(page: &PageView, session: Option<&Session>, is_admin: bool) {
    println!();
    match session {
        Some(session) if is_admin => println!("[{} — administrator]", session.display_name),
        Some(session) => println!("[{}]", session.display_name),
        None => println!("[signed out]"),
    }

    if page.is_empty() {
        println!("No movies cataloged yet.");
        return;
    }

    for movie in &page.items {
        let size = movie.file_size.as_deref().unwrap_or("-");
        println!(
            "  {:<28} {:>4}  * {:>4.1}  {:>8}  {}",
            movie.title,
            movie.year,
            movie.rating,
            size,
            view::poster_or_placeholder(movie),
        );
    }

    let prev = if page.has_prev { "<prev" } else { "     " };
    let next = if page.has_next { "next>" } else { "     " };
    println!(
        "  {prev}  page {} / {}  {next}",
        page.current_page, page.total_pages
    );
}

fn run_add<I>(app: &mut MarqueeCore, lines: &mut I)
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(title) = read_line(lines, "Title: ") else {
        return;
    };
    let Some(year_raw) = read_line(lines, "Year: ") else {
        return;
    };
    let Ok(year) = year_raw.trim().parse::<i32>() else {
        println!("Please enter a valid year.");
        return;
    };
    let Some(rating_raw) = read_line(lines, "Rating (0-10): ") else {
        return;
    };
    let Ok(rating) = rating_raw.trim().parse::<f64>() else {
        println!("Please enter a valid rating.");
        return;
    };
    let Some(poster) = read_line(lines, "Poster URL (optional): ") else {
        return;
    };
    let Some(path_raw) = read_line(lines, "Movie file path: ") else {
        return;
    };

    let file = selected_file(path_raw.trim());
    let form = UploadForm {
        title: title.trim().to_string(),
        year,
        rating,
        poster: poster.trim().to_string(),
    };

    let mut task = match app.begin_upload(form, file) {
        Ok(task) => task,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    run_progress(&mut task);

    match app.complete_upload(task, Utc::now()) {
        Ok(view) => {
            let movie = &view.items[0];
            let size = movie.file_size.as_deref().unwrap_or("-");
            println!("Success! \"{}\" ({size}) published to the catalog.", movie.title);
        }
        Err(err) => println!("{err}"),
    }
}

/// Ticks the task on the fixed interval with uniform random increments,
/// drawing the progress bar in place.
fn run_progress(task: &mut UploadTask) {
    let mut rng = rand::rng();

    loop {
        std::thread::sleep(upload::TICK_INTERVAL);
        let increment = rng.random_range(0.0..=upload::MAX_TICK_INCREMENT);

        match task.tick(increment) {
            TickOutcome::InProgress(progress) => {
                print!("\rUploading... {progress:>5.1}%");
                let _ = io::stdout().flush();
            }
            TickOutcome::Complete => {
                println!("\rUploading... 100.0%");
                return;
            }
            TickOutcome::Cancelled => {
                println!("\rUpload cancelled.");
                return;
            }
        }
    }
}

fn selected_file(path: &str) -> Option<SelectedFile> {
    if path.is_empty() {
        return None;
    }
    let bytes = std::fs::metadata(path).map(|m| m.len()).ok()?;
    let name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    Some(SelectedFile { name, bytes })
}

fn read_line<I>(lines: &mut I, prompt: &str) -> Option<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{prompt}");
    let _ = io::stdout().flush();
    lines.next()?.ok()
}
