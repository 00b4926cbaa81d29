use clap::{Args, Parser, Subcommand};
use reqwest::{Method, RequestBuilder};
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "dealership-cli")]
#[command(about = "Command line client for the dealership API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every dealership with its cars
    List,
    /// Show one dealership
    Get { id: String },
    /// Create a dealership
    Create(DealershipArgs),
    /// Update a dealership (empty values keep the current ones)
    Update {
        id: String,
        #[command(flatten)]
        fields: DealershipArgs,
    },
    /// Delete a dealership and its cars
    Delete { id: String },
    /// List the cars of a dealership
    Cars { id: String },
    /// Show one car
    Car { id: String, car_id: String },
    /// Add a car to a dealership
    AddCar {
        id: String,
        #[command(flatten)]
        fields: CarArgs,
    },
    /// Update a car (zero or empty values keep the current ones)
    UpdateCar {
        id: String,
        car_id: String,
        #[command(flatten)]
        fields: CarArgs,
    },
    /// Delete a car
    DeleteCar { id: String, car_id: String },
}

#[derive(Args)]
struct DealershipArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    address: Option<String>,
}

#[derive(Args)]
struct CarArgs {
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    horsepower: Option<i64>,
    #[arg(long)]
    price: Option<f64>,
}

impl DealershipArgs {
    fn into_json(self) -> Value {
        let mut body = Map::new();
        if let Some(name) = self.name {
            body.insert("name".into(), Value::from(name));
        }
        if let Some(address) = self.address {
            body.insert("address".into(), Value::from(address));
        }
        Value::Object(body)
    }
}

impl CarArgs {
    fn into_json(self) -> Value {
        let mut body = Map::new();
        if let Some(model) = self.model {
            body.insert("model".into(), Value::from(model));
        }
        if let Some(horsepower) = self.horsepower {
            body.insert("horsepower".into(), Value::from(horsepower));
        }
        if let Some(price) = self.price {
            body.insert("price".into(), Value::from(price));
        }
        Value::Object(body)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');
    let request = |method: Method, path: String| -> RequestBuilder {
        client.request(method, format!("{}{}", base, path))
    };

    let builder = match cli.command {
        Commands::List => request(Method::GET, "/dealerships".into()),
        Commands::Get { id } => request(Method::GET, format!("/dealerships/{}", id)),
        Commands::Create(fields) => {
            request(Method::POST, "/dealerships".into()).json(&fields.into_json())
        }
        Commands::Update { id, fields } => {
            request(Method::PUT, format!("/dealerships/{}", id)).json(&fields.into_json())
        }
        Commands::Delete { id } => request(Method::DELETE, format!("/dealerships/{}", id)),
        Commands::Cars { id } => request(Method::GET, format!("/dealerships/{}/cars", id)),
        Commands::Car { id, car_id } => {
            request(Method::GET, format!("/dealerships/{}/cars/{}", id, car_id))
        }
        Commands::AddCar { id, fields } => {
            request(Method::POST, format!("/dealerships/{}/cars", id)).json(&fields.into_json())
        }
        Commands::UpdateCar { id, car_id, fields } => {
            request(Method::PUT, format!("/dealerships/{}/cars/{}", id, car_id))
                .json(&fields.into_json())
        }
        Commands::DeleteCar { id, car_id } => {
            request(Method::DELETE, format!("/dealerships/{}/cars/{}", id, car_id))
        }
    };

    print_response(builder.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
