use blog_client::BlogClient;
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    ListPosts,
    GetPost {
        id: Uuid,
    },
    PostsByCategory {
        category: Uuid,
    },
    CreatePost {
        #[clap(long)]
        category: Uuid,
        /// Post content as a JSON object, e.g. '{"title":"Hi"}'
        #[clap(long, value_parser = parse_object)]
        data: Option<Map<String, Value>>,
    },
    UpdatePost {
        id: Uuid,
        #[clap(long)]
        category: Option<Uuid>,
        #[clap(long, value_parser = parse_object)]
        data: Option<Map<String, Value>>,
    },
    DeletePost {
        id: Uuid,
    },
    Comment {
        post_id: Uuid,
        #[clap(long, value_parser = parse_object)]
        data: Map<String, Value>,
    },
    GetComment {
        id: Uuid,
    },
    CreateCategory {
        #[clap(long)]
        name: String,
    },
    ListCategories,
}

fn parse_object(raw: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("expected a JSON object".into()),
        Err(e) => Err(e.to_string()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let client = BlogClient::connect(&args.server)?;

    match args.command {
        Command::ListPosts => {
            let posts = client.list_posts().await?;
            println!("Posts ({})", posts.len());
            for post in posts {
                println!("- {}", post);
            }
        }
        Command::GetPost { id } => print_json(&client.get_post(id).await?)?,
        Command::PostsByCategory { category } => {
            let posts = client.list_posts_by_category(category).await?;
            println!("Posts ({})", posts.len());
            for post in posts {
                println!("- {}", post);
            }
        }
        Command::CreatePost { category, data } => {
            let post = client
                .create_post(category, data.unwrap_or_default())
                .await?;
            println!("Post created! ID: {}", post.id);
        }
        Command::UpdatePost { id, category, data } => {
            let post = client
                .update_post(id, category, data.unwrap_or_default())
                .await?;
            print_json(&post)?;
        }
        Command::DeletePost { id } => {
            let post = client.delete_post(id).await?;
            println!(
                "Post deleted! {} comment(s) removed with it",
                post.comments.len()
            );
        }
        Command::Comment { post_id, data } => {
            let comment = client.create_comment(post_id, data).await?;
            println!("Comment created! ID: {}", comment.id);
        }
        Command::GetComment { id } => print_json(&client.get_comment(id).await?)?,
        Command::CreateCategory { name } => {
            let category = client.create_category(&name).await?;
            println!("Category created! ID: {}", category.id);
        }
        Command::ListCategories => {
            for category in client.list_categories().await? {
                println!("- [{}] {}", category.id, category.name);
            }
        }
    }

    Ok(())
}
