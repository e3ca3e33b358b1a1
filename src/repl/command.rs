//! Console command language
//!
//! One command per line, whitespace-separated tokens. The command word is
//! matched case-insensitively; arguments keep the casing the user typed.

use thiserror::Error;

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    ShowAllPlaylists,
    ShowPlaylist(String),
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// Why a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please enter {0}.")]
    MissingArgument(&'static str),

    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown,
}

impl Command {
    /// Parse one input line
    ///
    /// The caller is expected to skip blank lines; an empty line parses as
    /// an unknown command.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut tokens = line.split_whitespace();
        let word = tokens.next().unwrap_or_default().to_uppercase();

        let command = match word.as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play(arg(&mut tokens, "PLAY command followed by video_id")?),
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist(arg(
                &mut tokens,
                "CREATE_PLAYLIST command followed by a playlist name",
            )?),
            "ADD_TO_PLAYLIST" => {
                let usage = "ADD_TO_PLAYLIST command followed by a playlist name and video_id";
                Command::AddToPlaylist {
                    playlist: arg(&mut tokens, usage)?,
                    video_id: arg(&mut tokens, usage)?,
                }
            }
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SHOW_PLAYLIST" => Command::ShowPlaylist(arg(
                &mut tokens,
                "SHOW_PLAYLIST command followed by a playlist name",
            )?),
            "REMOVE_FROM_PLAYLIST" => {
                let usage = "REMOVE_FROM_PLAYLIST command followed by a playlist name and video_id";
                Command::RemoveFromPlaylist {
                    playlist: arg(&mut tokens, usage)?,
                    video_id: arg(&mut tokens, usage)?,
                }
            }
            "CLEAR_PLAYLIST" => Command::ClearPlaylist(arg(
                &mut tokens,
                "CLEAR_PLAYLIST command followed by a playlist name",
            )?),
            "DELETE_PLAYLIST" => Command::DeletePlaylist(arg(
                &mut tokens,
                "DELETE_PLAYLIST command followed by a playlist name",
            )?),
            "SEARCH_VIDEOS" => Command::SearchVideos(arg(
                &mut tokens,
                "SEARCH_VIDEOS command followed by a search term",
            )?),
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag(arg(
                &mut tokens,
                "SEARCH_VIDEOS_WITH_TAG command followed by a video tag",
            )?),
            "FLAG_VIDEO" => Command::FlagVideo {
                video_id: arg(&mut tokens, "FLAG_VIDEO command followed by a video_id")?,
                reason: tokens.next().map(str::to_string),
            },
            "ALLOW_VIDEO" => Command::AllowVideo(arg(
                &mut tokens,
                "ALLOW_VIDEO command followed by a video_id",
            )?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown),
        };

        Ok(command)
    }
}

fn arg(
    tokens: &mut std::str::SplitWhitespace<'_>,
    usage: &'static str,
) -> Result<String, CommandError> {
    tokens
        .next()
        .map(str::to_string)
        .ok_or(CommandError::MissingArgument(usage))
}

/// Text shown for the HELP command
pub(crate) const HELP_TEXT: &str = "Available commands:
  NUMBER_OF_VIDEOS                       Shows how many videos are in the library
  SHOW_ALL_VIDEOS                        Lists all videos ordered by title
  PLAY <video_id>                        Plays the given video
  PLAY_RANDOM                            Plays a random unflagged video
  STOP                                   Stops the current video
  PAUSE                                  Pauses the current video
  CONTINUE                               Resumes the paused video
  SHOW_PLAYING                           Shows the current video
  CREATE_PLAYLIST <name>                 Creates a new empty playlist
  ADD_TO_PLAYLIST <name> <video_id>      Adds a video to a playlist
  SHOW_ALL_PLAYLISTS                     Lists all playlists
  SHOW_PLAYLIST <name>                   Lists the videos in a playlist
  REMOVE_FROM_PLAYLIST <name> <video_id> Removes a video from a playlist
  CLEAR_PLAYLIST <name>                  Removes all videos from a playlist
  DELETE_PLAYLIST <name>                 Deletes a playlist
  SEARCH_VIDEOS <term>                   Searches video titles for a term
  SEARCH_VIDEOS_WITH_TAG <tag>           Searches videos by tag
  FLAG_VIDEO <video_id> [reason]         Flags a video
  ALLOW_VIDEO <video_id>                 Removes the flag from a video
  HELP                                   Shows this help
  EXIT                                   Leaves the console";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_command() {
        assert_eq!(Command::parse("NUMBER_OF_VIDEOS"), Ok(Command::NumberOfVideos));
        assert_eq!(Command::parse("EXIT"), Ok(Command::Exit));
    }

    #[test]
    fn test_command_word_is_case_insensitive() {
        assert_eq!(
            Command::parse("play amazing_cats_video_id"),
            Ok(Command::Play("amazing_cats_video_id".to_string()))
        );
        assert_eq!(Command::parse("Show_All_Videos"), Ok(Command::ShowAllVideos));
    }

    #[test]
    fn test_arguments_keep_their_casing() {
        assert_eq!(
            Command::parse("CREATE_PLAYLIST MyPlaylist"),
            Ok(Command::CreatePlaylist("MyPlaylist".to_string()))
        );
    }

    #[test]
    fn test_two_argument_commands() {
        assert_eq!(
            Command::parse("ADD_TO_PLAYLIST my_list amazing_cats_video_id"),
            Ok(Command::AddToPlaylist {
                playlist: "my_list".to_string(),
                video_id: "amazing_cats_video_id".to_string(),
            })
        );
    }

    #[test]
    fn test_flag_reason_is_optional() {
        assert_eq!(
            Command::parse("FLAG_VIDEO amazing_cats_video_id"),
            Ok(Command::FlagVideo {
                video_id: "amazing_cats_video_id".to_string(),
                reason: None,
            })
        );
        assert_eq!(
            Command::parse("FLAG_VIDEO amazing_cats_video_id dont_like_cats"),
            Ok(Command::FlagVideo {
                video_id: "amazing_cats_video_id".to_string(),
                reason: Some("dont_like_cats".to_string()),
            })
        );
    }

    #[test]
    fn test_missing_argument_names_the_usage() {
        let err = Command::parse("PLAY").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter PLAY command followed by video_id."
        );

        let err = Command::parse("ADD_TO_PLAYLIST my_list").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter ADD_TO_PLAYLIST command followed by a playlist name and video_id."
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("DANCE").unwrap_err();
        assert_eq!(err, CommandError::Unknown);
        assert_eq!(
            err.to_string(),
            "Please enter a valid command, type HELP for a list of available commands."
        );
    }
}
