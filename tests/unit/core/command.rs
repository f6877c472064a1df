use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::Quit.name(), "quit");
    assert_eq!(Command::Export(None).name(), "export");
    assert_eq!(
        Command::Select {
            name: "x".to_string(),
            force: false
        }
        .name(),
        "select"
    );
}

#[test]
fn test_help_lists_every_command() {
    for line in [
        "help", "projects", "templates", "files", "show", "save", "export", "status", "quit",
    ] {
        let command = Command::parse(line).unwrap();
        assert!(
            HELP.iter().any(|(usage, _)| usage.starts_with(command.name())),
            "{line}"
        );
    }
}

#[test]
fn test_parse_keeps_spaces_in_names() {
    assert_eq!(
        Command::parse("select WTZ Base (template)").unwrap(),
        Command::Select {
            name: "WTZ Base (template)".to_string(),
            force: false
        }
    );
    assert_eq!(
        Command::parse("template  Drug System Template ").unwrap(),
        Command::Template("Drug System Template".to_string())
    );
}

#[test]
fn test_parse_select_force() {
    assert_eq!(
        Command::parse("select -f res").unwrap(),
        Command::Select {
            name: "res".to_string(),
            force: true
        }
    );
    assert_eq!(
        Command::parse("select -fancy").unwrap(),
        Command::Select {
            name: "-fancy".to_string(),
            force: false
        }
    );
    assert!(matches!(
        Command::parse("select -f"),
        Err(CommandError::MissingArgument { command: "select", .. })
    ));
}

#[test]
fn test_parse_edit_unescapes_text() {
    assert_eq!(
        Command::parse(r"edit config.lua Config = {}\nreturn Config").unwrap(),
        Command::Edit {
            path: "config.lua".to_string(),
            content: "Config = {}\nreturn Config".to_string()
        }
    );
    assert_eq!(
        Command::parse(r"edit a.lua x\\ny\q").unwrap(),
        Command::Edit {
            path: "a.lua".to_string(),
            content: r"x\ny\q".to_string()
        }
    );
}

#[test]
fn test_parse_edit_without_text_clears_file() {
    assert_eq!(
        Command::parse("edit a.lua").unwrap(),
        Command::Edit {
            path: "a.lua".to_string(),
            content: String::new()
        }
    );
}

#[test]
fn test_parse_export_dir_is_optional() {
    assert_eq!(Command::parse("export").unwrap(), Command::Export(None));
    assert_eq!(
        Command::parse("export out/zips").unwrap(),
        Command::Export(Some(PathBuf::from("out/zips")))
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(Command::parse("   "), Err(CommandError::Empty));
    assert_eq!(
        Command::parse("deploy now"),
        Err(CommandError::Unknown("deploy".to_string()))
    );
    assert!(matches!(
        Command::parse("ask"),
        Err(CommandError::MissingArgument { command: "ask", .. })
    ));
}
