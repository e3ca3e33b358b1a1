//! Interactive console session
//!
//! A thin presentation layer over the library: each input line parses to a
//! [`Command`], runs one library operation and renders the outcome. Every
//! message template lives here, filled with the identifiers the user typed;
//! the library itself never prints or reads.

mod command;

pub use command::{Command, CommandError};

use crate::library::{LibraryError, LibraryManager, PlayOutcome, SearchOutcome};
use crate::model::Video;
use std::io::{self, BufRead, Write};

/// Run a console session until EXIT or end of input
///
/// Generic over input and output so a whole session can be driven from a
/// string in tests, with everything it printed captured.
pub fn run<R: BufRead, W: Write>(
    manager: &mut LibraryManager,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let mut lines = input.lines();

    writeln!(output, "Hello and welcome to the video console!")?;
    writeln!(output, "Type HELP for a list of available commands.")?;

    while let Some(line) = lines.next() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Exit) => break,
            Ok(parsed) => execute(manager, parsed, &mut lines, &mut output)?,
            Err(error) => writeln!(output, "{}", error)?,
        }
    }

    writeln!(output, "Goodbye!")?;
    output.flush()
}

fn execute<R: BufRead, W: Write>(
    manager: &mut LibraryManager,
    command: Command,
    lines: &mut io::Lines<R>,
    output: &mut W,
) -> io::Result<()> {
    match command {
        Command::NumberOfVideos => {
            writeln!(output, "{} videos in the library", manager.number_of_videos())
        }
        Command::ShowAllVideos => {
            writeln!(output, "Here's a list of all available videos:")?;
            for video in manager.all_videos() {
                writeln!(output, "  {}", video_line(video))?;
            }
            Ok(())
        }
        Command::Play(video_id) => match manager.play(&video_id) {
            Ok(outcome) => render_play(&outcome, output),
            Err(error) => writeln!(output, "Cannot play video: {}", error),
        },
        Command::PlayRandom => match manager.play_random() {
            Ok(outcome) => render_play(&outcome, output),
            Err(LibraryError::NoVideosAvailable) => writeln!(output, "No videos available"),
            Err(error) => writeln!(output, "Cannot play video: {}", error),
        },
        Command::Stop => match manager.stop() {
            Ok(title) => writeln!(output, "Stopping video: {}", title),
            Err(error) => writeln!(output, "Cannot stop video: {}", error),
        },
        Command::Pause => match manager.pause() {
            Ok(title) => writeln!(output, "Pausing video: {}", title),
            // the already-paused notice stands on its own, without a prefix
            Err(error @ LibraryError::AlreadyPaused { .. }) => writeln!(output, "{}", error),
            Err(error) => writeln!(output, "Cannot pause video: {}", error),
        },
        Command::Continue => match manager.resume() {
            Ok(title) => writeln!(output, "Continuing video: {}", title),
            Err(error) => writeln!(output, "Cannot continue video: {}", error),
        },
        Command::ShowPlaying => match manager.now_playing() {
            Some(now) if now.paused => {
                writeln!(output, "Currently playing: {} - PAUSED", now.video)
            }
            Some(now) => writeln!(output, "Currently playing: {}", now.video),
            None => writeln!(output, "No video is currently playing"),
        },
        Command::CreatePlaylist(name) => match manager.create_playlist(&name) {
            Ok(()) => writeln!(output, "Successfully created new playlist: {}", name),
            Err(error) => writeln!(output, "Cannot create playlist: {}", error),
        },
        Command::AddToPlaylist { playlist, video_id } => {
            match manager.add_to_playlist(&playlist, &video_id) {
                Ok(title) => writeln!(output, "Added video to {}: {}", playlist, title),
                Err(error) => writeln!(output, "Cannot add video to {}: {}", playlist, error),
            }
        }
        Command::ShowAllPlaylists => {
            let names = manager.playlist_names();
            if names.is_empty() {
                writeln!(output, "No playlists exist yet")
            } else {
                writeln!(output, "Showing all playlists:")?;
                for name in names {
                    writeln!(output, "{}", name)?;
                }
                Ok(())
            }
        }
        Command::ShowPlaylist(name) => match manager.playlist_contents(&name) {
            Ok(videos) => {
                writeln!(output, "Showing playlist: {}", name)?;
                if videos.is_empty() {
                    writeln!(output, "No videos here yet")?;
                }
                for video in videos {
                    writeln!(output, "{}", video_line(video))?;
                }
                Ok(())
            }
            Err(error) => writeln!(output, "Cannot show playlist {}: {}", name, error),
        },
        Command::RemoveFromPlaylist { playlist, video_id } => {
            match manager.remove_from_playlist(&playlist, &video_id) {
                Ok(title) => writeln!(output, "Removed video from {}: {}", playlist, title),
                Err(error) => {
                    writeln!(output, "Cannot remove video from {}: {}", playlist, error)
                }
            }
        }
        Command::ClearPlaylist(name) => match manager.clear_playlist(&name) {
            Ok(()) => writeln!(output, "Successfully removed all videos from {}", name),
            Err(error) => writeln!(output, "Cannot clear playlist {}: {}", name, error),
        },
        Command::DeletePlaylist(name) => match manager.delete_playlist(&name) {
            Ok(()) => writeln!(output, "Deleted playlist: {}", name),
            Err(error) => writeln!(output, "Cannot delete playlist {}: {}", name, error),
        },
        Command::SearchVideos(term) => {
            let outcome = manager.search(&term);
            render_search(manager, outcome, lines, output)
        }
        Command::SearchVideosWithTag(tag) => {
            let outcome = manager.search_by_tag(&tag);
            render_search(manager, outcome, lines, output)
        }
        Command::FlagVideo { video_id, reason } => {
            match manager.flag(&video_id, reason.as_deref()) {
                Ok(outcome) => {
                    if let Some(previous) = &outcome.stopped {
                        writeln!(output, "Stopping video: {}", previous)?;
                    }
                    writeln!(
                        output,
                        "Successfully flagged video: {} (reason: {})",
                        outcome.title, outcome.reason
                    )
                }
                Err(error) => writeln!(output, "Cannot flag video: {}", error),
            }
        }
        Command::AllowVideo(video_id) => match manager.allow(&video_id) {
            Ok(title) => writeln!(output, "Successfully removed flag from video: {}", title),
            Err(error) => writeln!(output, "Cannot remove flag from video: {}", error),
        },
        Command::Help => writeln!(output, "{}", command::HELP_TEXT),
        // EXIT never reaches here, the session loop ends on it
        Command::Exit => Ok(()),
    }
}

/// Print search results and, when there are any, offer to play one
///
/// The selection answer is read from the session input right here; this is
/// the only place the console reads beyond the command line itself.
fn render_search<R: BufRead, W: Write>(
    manager: &mut LibraryManager,
    outcome: SearchOutcome,
    lines: &mut io::Lines<R>,
    output: &mut W,
) -> io::Result<()> {
    if outcome.matches.is_empty() {
        return writeln!(output, "No search results for {}", outcome.term);
    }

    writeln!(output, "Here are the results for {}:", outcome.term)?;
    for (position, video) in outcome.matches.iter().enumerate() {
        writeln!(output, "{}) {}", position + 1, video)?;
    }
    writeln!(
        output,
        "Would you like to play any of the above? If yes, specify the number of the video."
    )?;
    writeln!(
        output,
        "If your answer is not a valid number, we will assume it's a no."
    )?;

    let answer = match lines.next() {
        Some(line) => line?,
        None => return Ok(()),
    };

    if let Ok(choice) = answer.trim().parse::<usize>() {
        match manager.select_from_results(choice) {
            Ok(Some(played)) => render_play(&played, output)?,
            Ok(None) => {}
            Err(error) => writeln!(output, "Cannot play video: {}", error)?,
        }
    }

    Ok(())
}

fn render_play(outcome: &PlayOutcome, output: &mut impl Write) -> io::Result<()> {
    if let Some(previous) = &outcome.stopped {
        writeln!(output, "Stopping video: {}", previous)?;
    }
    writeln!(output, "Playing video: {}", outcome.title)
}

/// One catalog or playlist listing line, with the flag annotation when set
fn video_line(video: &Video) -> String {
    match video.flag_reason() {
        Some(reason) => format!("{} - FLAGGED (reason: {})", video, reason),
        None => video.to_string(),
    }
}
