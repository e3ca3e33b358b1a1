use std::fs;
use tempfile::TempDir;
use video_console::library::{Catalog, LibraryManager};
use video_console::{repl, seed};

/// Create a manager over the built-in demo catalog
fn demo_manager() -> LibraryManager {
    LibraryManager::new(Catalog::from_seed(seed::default_catalog()))
}

/// Feed a whole scripted session to the console and capture what it printed
fn run_session(manager: &mut LibraryManager, script: &str) -> String {
    let mut output = Vec::new();
    repl::run(manager, script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Assert that `lines` appear in the output, in this order
fn assert_in_order(output: &str, lines: &[&str]) {
    let mut from = 0;
    for line in lines {
        match output[from..].find(line) {
            Some(at) => from += at + line.len(),
            None => panic!("expected {:?} after position {} in:\n{}", line, from, output),
        }
    }
}

#[test]
fn test_minimal_session_transcript() {
    let output = run_session(&mut demo_manager(), "NUMBER_OF_VIDEOS\nEXIT\n");
    assert_eq!(
        output,
        "Hello and welcome to the video console!\n\
         Type HELP for a list of available commands.\n\
         5 videos in the library\n\
         Goodbye!\n"
    );
}

#[test]
fn test_show_all_videos_lists_sorted_and_indented() {
    let output = run_session(&mut demo_manager(), "SHOW_ALL_VIDEOS\n");
    assert_in_order(
        &output,
        &[
            "Here's a list of all available videos:",
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "  Another Cat Video (another_cat_video_id) [#cat #animal]",
            "  Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            "  Life at Google (life_at_google_video_id) [#google #career]",
            "  Video about nothing (nothing_video_id) []",
        ],
    );
}

#[test]
fn test_playback_session() {
    let script = "PLAY funny_dogs_video_id\n\
                  PAUSE\n\
                  SHOW_PLAYING\n\
                  CONTINUE\n\
                  PLAY amazing_cats_video_id\n\
                  STOP\n\
                  STOP\n\
                  EXIT\n";
    let output = run_session(&mut demo_manager(), script);
    assert_in_order(
        &output,
        &[
            "Playing video: Funny Dogs",
            "Pausing video: Funny Dogs",
            "Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal] - PAUSED",
            "Continuing video: Funny Dogs",
            "Stopping video: Funny Dogs",
            "Playing video: Amazing Cats",
            "Stopping video: Amazing Cats",
            "Cannot stop video: No video is currently playing",
        ],
    );
}

#[test]
fn test_pause_edge_messages() {
    let script = "PAUSE\nPLAY nothing_video_id\nPAUSE\nPAUSE\nEXIT\n";
    let output = run_session(&mut demo_manager(), script);
    assert_in_order(
        &output,
        &[
            "Cannot pause video: No video is currently playing",
            "Playing video: Video about nothing",
            "Pausing video: Video about nothing",
            "Video already paused: Video about nothing",
        ],
    );
    // the repeat notice comes without the cannot-pause prefix
    assert!(!output.contains("Cannot pause video: Video already paused"));
}

#[test]
fn test_playlist_session() {
    let script = "CREATE_PLAYLIST my_PLAYlist\n\
                  CREATE_PLAYLIST my_playlist\n\
                  ADD_TO_PLAYLIST my_PLAYlist amazing_cats_video_id\n\
                  ADD_TO_PLAYLIST my_PLAYlist amazing_cats_video_id\n\
                  SHOW_PLAYLIST my_PLAYlist\n\
                  SHOW_ALL_PLAYLISTS\n\
                  REMOVE_FROM_PLAYLIST my_PLAYlist amazing_cats_video_id\n\
                  ADD_TO_PLAYLIST my_PLAYlist funny_dogs_video_id\n\
                  CLEAR_PLAYLIST my_PLAYlist\n\
                  SHOW_PLAYLIST my_PLAYlist\n\
                  DELETE_PLAYLIST my_PLAYlist\n\
                  SHOW_ALL_PLAYLISTS\n\
                  EXIT\n";
    let output = run_session(&mut demo_manager(), script);
    assert_in_order(
        &output,
        &[
            "Successfully created new playlist: my_PLAYlist",
            "Cannot create playlist: A playlist with the same name already exists",
            "Added video to my_PLAYlist: Amazing Cats",
            "Cannot add video to my_PLAYlist: Video already added",
            "Showing playlist: my_PLAYlist",
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "Showing all playlists:",
            "my_PLAYlist",
            "Removed video from my_PLAYlist: Amazing Cats",
            "Added video to my_PLAYlist: Funny Dogs",
            "Successfully removed all videos from my_PLAYlist",
            "Showing playlist: my_PLAYlist",
            "No videos here yet",
            "Deleted playlist: my_PLAYlist",
            "No playlists exist yet",
        ],
    );
}

#[test]
fn test_playlist_error_messages_use_the_typed_name() {
    let script = "ADD_TO_PLAYLIST nowhere amazing_cats_video_id\n\
                  SHOW_PLAYLIST nowhere\n\
                  CLEAR_PLAYLIST nowhere\n\
                  DELETE_PLAYLIST nowhere\n\
                  EXIT\n";
    let output = run_session(&mut demo_manager(), script);
    assert_in_order(
        &output,
        &[
            "Cannot add video to nowhere: Playlist does not exist",
            "Cannot show playlist nowhere: Playlist does not exist",
            "Cannot clear playlist nowhere: Playlist does not exist",
            "Cannot delete playlist nowhere: Playlist does not exist",
        ],
    );
}

#[test]
fn test_search_and_select_session() {
    let script = "SEARCH_VIDEOS cat\n\
                  1\n\
                  SEARCH_VIDEOS_WITH_TAG #google\n\
                  1\n\
                  SEARCH_VIDEOS xyzzy\n\
                  EXIT\n";
    let mut manager = demo_manager();
    let output = run_session(&mut manager, script);
    assert_in_order(
        &output,
        &[
            "Here are the results for cat:",
            "1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "2) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "Playing video: Amazing Cats",
            "Here are the results for #google:",
            "1) Life at Google (life_at_google_video_id) [#google #career]",
            "Stopping video: Amazing Cats",
            "Playing video: Life at Google",
            "No search results for xyzzy",
        ],
    );
    assert_eq!(manager.now_playing().unwrap().video.title(), "Life at Google");
}

#[test]
fn test_search_answer_out_of_range_is_ignored() {
    let script = "SEARCH_VIDEOS cat\n8\nSEARCH_VIDEOS cat\nnope\nEXIT\n";
    let mut manager = demo_manager();
    let output = run_session(&mut manager, script);
    assert!(!output.contains("Playing video:"));
    assert!(manager.now_playing().is_none());
}

#[test]
fn test_flag_session() {
    let script = "PLAY amazing_cats_video_id\n\
                  FLAG_VIDEO amazing_cats_video_id dont_like_cats\n\
                  PLAY amazing_cats_video_id\n\
                  SEARCH_VIDEOS cat\n\
                  no\n\
                  FLAG_VIDEO nothing_video_id\n\
                  ALLOW_VIDEO amazing_cats_video_id\n\
                  PLAY amazing_cats_video_id\n\
                  EXIT\n";
    let output = run_session(&mut demo_manager(), script);
    assert_in_order(
        &output,
        &[
            "Playing video: Amazing Cats",
            "Stopping video: Amazing Cats",
            "Successfully flagged video: Amazing Cats (reason: dont_like_cats)",
            "Cannot play video: Video is currently flagged (reason: dont_like_cats)",
            "Here are the results for cat:",
            "1) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "Successfully flagged video: Video about nothing (reason: Not supplied)",
            "Successfully removed flag from video: Amazing Cats",
            "Playing video: Amazing Cats",
        ],
    );
    // the flagged cat video must not appear among the results
    assert!(!output.contains("2) "));
}

#[test]
fn test_unknown_and_incomplete_commands() {
    let script = "DANCE\nPLAY\nADD_TO_PLAYLIST mix\nEXIT\n";
    let output = run_session(&mut demo_manager(), script);
    assert_in_order(
        &output,
        &[
            "Please enter a valid command, type HELP for a list of available commands.",
            "Please enter PLAY command followed by video_id.",
            "Please enter ADD_TO_PLAYLIST command followed by a playlist name and video_id.",
        ],
    );
}

#[test]
fn test_help_lists_every_command() {
    let output = run_session(&mut demo_manager(), "HELP\nEXIT\n");
    for command in [
        "NUMBER_OF_VIDEOS",
        "SHOW_ALL_VIDEOS",
        "PLAY ",
        "PLAY_RANDOM",
        "STOP",
        "PAUSE",
        "CONTINUE",
        "SHOW_PLAYING",
        "CREATE_PLAYLIST",
        "ADD_TO_PLAYLIST",
        "SHOW_ALL_PLAYLISTS",
        "SHOW_PLAYLIST",
        "REMOVE_FROM_PLAYLIST",
        "CLEAR_PLAYLIST",
        "DELETE_PLAYLIST",
        "SEARCH_VIDEOS",
        "SEARCH_VIDEOS_WITH_TAG",
        "FLAG_VIDEO",
        "ALLOW_VIDEO",
        "HELP",
        "EXIT",
    ] {
        assert!(output.contains(command), "help is missing {:?}", command);
    }
}

#[test]
fn test_catalog_file_feeds_a_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.txt");
    fs::write(
        &path,
        "Board Games Night|board_games_id|#games #fun\n\
         \n\
         malformed line without separators\n\
         Sourdough Basics|sourdough_id|#baking\n\
         Silent Film|silent_film_id|\n",
    )
    .unwrap();

    let videos = seed::parse_catalog_file(&path).unwrap();
    assert_eq!(videos.len(), 3);

    let mut manager = LibraryManager::new(Catalog::from_seed(videos));
    let output = run_session(&mut manager, "NUMBER_OF_VIDEOS\nSHOW_ALL_VIDEOS\nEXIT\n");
    assert_in_order(
        &output,
        &[
            "3 videos in the library",
            "  Board Games Night (board_games_id) [#games #fun]",
            "  Silent Film (silent_film_id) []",
            "  Sourdough Basics (sourdough_id) [#baking]",
        ],
    );
}
