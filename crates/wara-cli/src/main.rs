use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wara_feed::Nup;
use wara_mii::{Mii, MiiField};

/// WaraWara Plaza record and feed tool
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    subcommands: Subcommands,
}

#[derive(Subcommand, Debug, Clone)]
enum Subcommands {
    /// Generate a random record from a seed and print it base64-encoded
    Random {
        seed: String,
        #[arg(short, long, default_value = "wara")]
        name: String,
        #[arg(short, long, default_value = "wara")]
        creator: String,
    },
    /// Decode a base64 record and print its fields
    Inspect { encoded: String },
    /// Build a plaza feed document filled with generated records
    Feed {
        /// Topic name, repeatable
        #[arg(short, long, required = true)]
        topic: Vec<String>,
        /// Posts per topic
        #[arg(short, long, default_value_t = 3)]
        posts: usize,
        #[arg(short, long, default_value = "wara")]
        seed: String,
        output: PathBuf,
    },
}

// A quick debug tool, so unwraps abound.
fn main() {
    let args = Args::parse();

    match args.subcommands {
        Subcommands::Random {
            seed,
            name,
            creator,
        } => {
            let mii = Mii::create_random(&seed, &name, &creator).unwrap();
            println!("{}", mii.encode());
        }
        Subcommands::Inspect { encoded } => {
            let mii = Mii::from_encoded(&encoded).unwrap();
            println!("name:         {}", mii.name());
            println!("creator:      {}", mii.creator_name());
            println!("version:      {}", mii.version());
            println!("checksum:     {:#06x}", mii.checksum());
            for field in MiiField::ALL {
                let d = field.descriptor();
                // Name slots read as text above, not as integers.
                if d.width_bits > 64 {
                    continue;
                }
                println!("{field:?}: {}", mii.get(field));
            }
        }
        Subcommands::Feed {
            topic,
            posts,
            seed,
            output,
        } => {
            let mut nup = Nup::new();
            for name in &topic {
                nup.add_topic(name).unwrap();
            }
            let mut n = 0;
            for name in &topic {
                for _ in 0..posts {
                    let mii =
                        Mii::create_random(&format!("{seed}/{n}"), "wara", "wara").unwrap();
                    nup.add_post(name).unwrap().mii = mii.encode();
                    n += 1;
                }
            }
            nup.render_to_file(output).unwrap();
        }
    }
}
