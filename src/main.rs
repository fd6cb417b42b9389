use clap::Parser;
use mtag::application::{
    ConfigService, FindRecordsService, InitService, ListTagsService, ShowSqlService,
    TagRecordService,
};
use mtag::cli::{format_record_list, format_tag_list, Cli, Commands};
use mtag::domain::tags::FinderOptions;
use mtag::error::MtagError;
use mtag::infrastructure::FileStoreRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MtagError> {
    match cli.command {
        Some(Commands::Init {
            path,
            taggable_type,
            delimiter,
        }) => InitService::execute(&path, &taggable_type, &delimiter),
        Some(Commands::Add { name, tags, set }) => {
            let repo = FileStoreRepository::discover()?;
            let attributes = parse_attributes(&set)?;

            let applied = TagRecordService::new(repo).execute(&name, &tags, &attributes)?;
            println!("Tagged '{}' with {} tag(s)", name, applied);
            Ok(())
        }
        Some(Commands::Find {
            tags,
            match_all,
            exclude,
            conditions,
        }) => {
            let repo = FileStoreRepository::discover()?;
            let options = FinderOptions {
                conditions,
                exclude,
                match_all,
            };

            let records = FindRecordsService::new(repo).execute(&tags, &options)?;
            println!("{}", format_record_list(&records).trim_end());
            Ok(())
        }
        Some(Commands::Tags) => {
            let repo = FileStoreRepository::discover()?;
            let tags = ListTagsService::new(repo).execute()?;
            println!("{}", format_tag_list(&tags).trim_end());
            Ok(())
        }
        Some(Commands::Sql {
            tags,
            match_all,
            exclude,
            conditions,
        }) => {
            let repo = FileStoreRepository::discover()?;
            let options = FinderOptions {
                conditions,
                exclude,
                match_all,
            };

            match ShowSqlService::new(repo).execute(&tags, &options)? {
                Some(sql) => println!("{}", sql),
                None => println!("No query: empty tag list"),
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileStoreRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("taggable_type = {}", config.taggable_type);
                println!("delimiter = {}", config.delimiter);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: mtag config [--list | <key> [<value>]]");
                println!("Valid keys: taggable_type, delimiter, created");
                Ok(())
            }
        }
        None => {
            println!("mtag - Machine-tag record finder");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn parse_attributes(pairs: &[String]) -> Result<Vec<(String, String)>, MtagError> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| {
                    MtagError::Config(format!(
                        "Invalid --set value '{}', expected KEY=VALUE",
                        pair
                    ))
                })
        })
        .collect()
}
