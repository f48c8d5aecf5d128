use std::collections::HashSet;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use clap::Parser;
use serde::Deserialize;
use name_gen_core::io::{capitalize, get_filename, read_words};
use name_gen_core::model::DEFAULT_MAX_LENGTH;
use name_gen_core::{FrequencyModel, NameGenError, WordSampler};

/// Upper bound on `count` for a single `/v1/generate` request.
const MAX_COUNT: usize = 1000;

/// Upper bound on `nb_try` for a single `/v1/generate` request.
const MAX_NB_TRY: usize = 100;

/// Serves words generated from a seed list over HTTP.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
	/// Seed list, one word per line
	#[arg(long, env = "NAME_GEN_CORPUS", default_value = "./data/first-names.txt")]
	corpus: PathBuf,

	/// Address to bind
	#[arg(long, env = "NAME_GEN_BIND", default_value = "127.0.0.1")]
	bind: String,

	/// Port to listen on
	#[arg(long, env = "NAME_GEN_PORT", default_value_t = 5000)]
	port: u16,

	/// Default cap on generated word length
	#[arg(long, env = "NAME_GEN_MAX_LENGTH", default_value_t = DEFAULT_MAX_LENGTH)]
	max_length: usize,
}

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	nb_try: Option<usize>,
	max_length: Option<usize>,
	capitalize: Option<bool>
}

/// Read-only state shared by every worker.
///
/// Built once before the server starts; never mutated afterwards, so no lock.
struct SharedData {
	name: String,
	model: FrequencyModel,
	known: HashSet<String>,
	max_length: usize,
}

impl SharedData {
	fn new(name: String, words: Vec<String>, max_length: usize) -> Result<Self, NameGenError> {
		let model = FrequencyModel::from_words(&words)?;
		Ok(Self { name, model, known: words.into_iter().collect(), max_length })
	}

	fn sampler(&self, max_length: Option<usize>) -> WordSampler<'_> {
		WordSampler::new(&self.model).with_max_length(max_length.unwrap_or(self.max_length))
	}
}

/// Maps a generation error to a response.
///
/// Overruns are retryable and reported as 503; anything else is a defect.
fn error_response(e: &NameGenError) -> HttpResponse {
	if e.is_retryable() {
		log::warn!("generation failed: {e}");
		HttpResponse::ServiceUnavailable().body(e.to_string())
	} else {
		log::error!("generation failed: {e}");
		HttpResponse::InternalServerError().body(e.to_string())
	}
}

/// HTTP GET endpoint `/`
///
/// Returns one capitalized generated name.
#[get("/")]
async fn get_home(data: web::Data<SharedData>) -> impl Responder {
	match data.sampler(None).generate() {
		Ok(word) => HttpResponse::Ok().body(capitalize(&word)),
		Err(e) => error_response(&e),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` words (newline separated). With `nb_try`, each word is
/// regenerated up to `nb_try` times while it is one of the seed words.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1);
	let nb_try = query.nb_try.unwrap_or(0);
	let capitalized = query.capitalize.unwrap_or(false);

	if count == 0 || count > MAX_COUNT {
		return HttpResponse::BadRequest().body(format!("count must be between 1 and {MAX_COUNT}"));
	}
	if nb_try > MAX_NB_TRY {
		return HttpResponse::BadRequest().body(format!("nb_try must be at most {MAX_NB_TRY}"));
	}

	let sampler = data.sampler(query.max_length);
	let mut rng = rand::rng();
	let mut words = Vec::with_capacity(count);
	for _ in 0..count {
		match sampler.generate_novel(&mut rng, &data.known, nb_try) {
			Ok(word) if capitalized => words.push(capitalize(&word)),
			Ok(word) => words.push(word),
			Err(e) => return error_response(&e),
		}
	}

	HttpResponse::Ok().body(words.join("\n"))
}

/// HTTP GET endpoint `/v1/model`
///
/// Plain-text summary of the loaded model.
#[get("/v1/model")]
async fn get_model(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().body(format!(
		"name: {}\nwords: {}\nunique words: {}\npositions: {}\nstates: {}",
		data.name,
		data.model.word_count(),
		data.known.len(),
		data.model.position_count(),
		data.model.state_count()
	))
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_home)
		.service(get_generated)
		.service(get_model);
}

/// Main entry point for the server.
///
/// Builds the model from the seed list once, shares it read-only between
/// workers and starts an Actix-web HTTP server.
/// Any error while loading or building the model aborts startup.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let config = Config::parse();

	let to_io = |e: NameGenError| std::io::Error::other(e.to_string());
	let words = read_words(&config.corpus).map_err(to_io)?;
	let name = get_filename(&config.corpus)?;
	let shared_data = SharedData::new(name, words, config.max_length).map_err(to_io)?;
	log::info!(
		"loaded model '{}' ({} words, {} states)",
		shared_data.name,
		shared_data.model.word_count(),
		shared_data.model.state_count()
	);
	let shared_data = web::Data::new(shared_data);

	log::info!("listening on {}:{}", config.bind, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(shared_data.clone())
			.configure(configure)
	})
		.bind((config.bind.as_str(), config.port))?
		.run()
		.await
}
