//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    use ru_soundex::cli::commands::{resolve_config, run};
    use ru_soundex::cli::Cli;

    fn run_cli(args: &[&str], stdin: &str) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut output = Vec::new();
        run(cli, stdin.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn test_encode_words() {
        let out = run_cli(&["ru-soundex", "encode", "хорошо", "весна"], "").unwrap();
        assert_eq!(out, "хорошо\tХ309050\nвесна\tВ20680\n");
    }

    #[test]
    fn test_encode_from_stdin() {
        let out = run_cli(&["ru-soundex", "encode"], "хорошо\n\n  вестна  \n").unwrap();
        assert_eq!(out, "хорошо\tХ309050\nвестна\tВ20680\n");
    }

    #[test]
    fn test_encode_with_flags() {
        let out = run_cli(&["ru-soundex", "-z", "--cut", "encode", "хорошо"], "").unwrap();
        assert_eq!(out, "хорошо\tХ3950\n");

        let out = run_cli(&["ru-soundex", "encode", "хорошо", "--code-vowels"], "").unwrap();
        assert_eq!(out, "хорошо\tХ3A9A5A\n");
    }

    #[test]
    fn test_distance_command() {
        let out = run_cli(&["ru-soundex", "distance", "весна", "вестна"], "").unwrap();
        assert_eq!(out, "0\n");

        let out = run_cli(
            &["ru-soundex", "distance", "бок", "пок", "--tail-only", "--metric", "damerau-levenshtein"],
            "",
        )
        .unwrap();
        assert_eq!(out, "0\n");
    }

    #[test]
    fn test_config_file_and_flag_override() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("soundex.json");
        fs::write(&config_path, r#"{"delete_zeros": true, "cut_result": true, "seq_cutted_len": 6}"#)
            .unwrap();

        let path = config_path.to_str().unwrap();
        let out = run_cli(&["ru-soundex", "--config", path, "encode", "хорошо"], "").unwrap();
        assert_eq!(out, "хорошо\tХ395000\n");

        let cli = Cli::try_parse_from(["ru-soundex", "-c", path, "-l", "3", "encode"]).unwrap();
        let config = resolve_config(&cli.encoder).unwrap();
        assert!(config.delete_zeros);
        assert_eq!(config.seq_cutted_len, 3);
    }

    #[test]
    fn test_morph_dictionary() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = temp_dir.path().join("morph.tsv");
        fs::write(&dict_path, "# word\ttag\nкрасного\tADJF,Qual masc,sing,gent\n").unwrap();

        let path = dict_path.to_str().unwrap();
        let out = run_cli(&["ru-soundex", "--morph-dict", path, "encode", "красного", "много"], "")
            .unwrap();
        assert_eq!(out, "красного\tК39068020\nмного\tМ8030\n");
    }

    #[test]
    fn test_malformed_morph_dictionary_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = temp_dir.path().join("broken.tsv");
        fs::write(&dict_path, "красного ADJF\n").unwrap();

        let path = dict_path.to_str().unwrap();
        let err = run_cli(&["ru-soundex", "-m", path, "encode", "дом"], "").unwrap_err();
        assert!(format!("{:#}", err).contains("malformed morphology entry at line 1"));
    }

    #[test]
    fn test_morph_in_config_without_dictionary_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("soundex.json");
        fs::write(&config_path, r#"{"use_morph_analysis": true}"#).unwrap();

        let path = config_path.to_str().unwrap();
        assert!(run_cli(&["ru-soundex", "-c", path, "encode", "дом"], "").is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = run_cli(&["ru-soundex", "-c", "/nonexistent/soundex.json", "encode", "дом"], "")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
