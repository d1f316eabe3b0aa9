//! Integration tests for the season-folder matcher public API.

use media_renamer::core::season::{is_season_folder, parse_season_folder, SeasonMatchKind};

#[test]
fn test_match_kinds() {
    assert_eq!(
        parse_season_folder("Season 4").unwrap().kind,
        SeasonMatchKind::Standard
    );
    assert_eq!(
        parse_season_folder("S04").unwrap().kind,
        SeasonMatchKind::Short
    );
    assert_eq!(
        parse_season_folder("第三季").unwrap().kind,
        SeasonMatchKind::Chinese
    );
    assert_eq!(
        parse_season_folder("Specials").unwrap().kind,
        SeasonMatchKind::Specials
    );
}

#[test]
fn test_original_folder_name_is_preserved() {
    let info = parse_season_folder("  Season 7 ").unwrap();
    assert_eq!(info.folder_name, "  Season 7 ");
    assert_eq!(info.number, 7);
}

#[test]
fn test_is_season_folder_agrees_with_parse() {
    let names = [
        "Season 01",
        "season 1",
        "S2",
        "S01E01",
        "Specials",
        "第3季",
        "第十二季",
        "第二十一季",
        "Season 1 - 第一季",
        "Breaking Bad",
        "01",
        "",
        "  ",
        "4K",
    ];
    for name in names {
        assert_eq!(
            is_season_folder(name),
            parse_season_folder(name).is_some(),
            "mismatch for {name:?}"
        );
    }
}
