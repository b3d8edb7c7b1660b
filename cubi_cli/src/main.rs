//! # Cubicador CLI
//!
//! Terminal front end for the takeoff engine. Prompts for the dimensions
//! of a footing run and a masonry wall, prints the material lists, and
//! echoes the JSON form of each result for scripting use.

use std::io::{self, BufRead, Write};

use cubi_core::cubicaciones::muro::{self, MuroInput};
use cubi_core::cubicaciones::zapata::{self, ZapataInput};
use cubi_core::cubicaciones::ResultadoCubicacion;
use cubi_core::errors::CubiError;
use cubi_core::formato::formatear;
use cubi_core::materiales::{GradoHormigon, TipoLadrillo};
use cubi_core::unidades::Unidad;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Cubicador CLI - Cubicación de materiales de construcción");
    println!("========================================================");
    println!();

    println!("-- Zapatas (hormigón {}) --", GradoHormigon::H25);
    let largo = prompt_f64("Largo (m) [1.0]: ", 1.0);
    let ancho = prompt_f64("Ancho (m) [1.0]: ", 1.0);
    let alto = prompt_f64("Alto (m) [0.5]: ", 0.5);
    let cantidad = prompt_u32("Cantidad [4]: ", 4);

    let zapata = ZapataInput {
        label: "CLI-Zapata".to_string(),
        largo_m: largo,
        ancho_m: ancho,
        alto_m: alto,
        grado: GradoHormigon::H25,
        cantidad,
    };

    match zapata::calcular(&zapata) {
        Ok(resultado) => imprimir_resultado("ZAPATAS", &resultado),
        Err(e) => imprimir_error(&e),
    }

    println!();
    println!("-- Muro de albañilería ({}) --", TipoLadrillo::Fiscal);
    let largo = prompt_f64("Largo (m) [5.0]: ", 5.0);
    let alto = prompt_f64("Alto (m) [2.5]: ", 2.5);
    let estuco = prompt_u32("¿Con estuco? 1=sí 0=no [0]: ", 0) != 0;

    let muro = MuroInput {
        label: "CLI-Muro".to_string(),
        largo_m: largo,
        alto_m: alto,
        ladrillo: TipoLadrillo::Fiscal,
        con_estuco: estuco,
    };

    match muro::calcular(&muro) {
        Ok(resultado) => imprimir_resultado("MURO", &resultado),
        Err(e) => imprimir_error(&e),
    }
}

fn imprimir_resultado(titulo: &str, resultado: &ResultadoCubicacion) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  CUBICACIÓN: {}", titulo);
    println!("═══════════════════════════════════════");
    if let Some(volumen) = resultado.volumen {
        println!("  Volumen:    {}", formatear(volumen, Unidad::MetrosCubicos));
    }
    if let Some(superficie) = resultado.superficie {
        println!(
            "  Superficie: {}",
            formatear(superficie, Unidad::MetrosCuadrados)
        );
    }
    println!();
    println!("Materiales:");
    for material in &resultado.materiales {
        println!("  {material}");
    }
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON:");
    if let Ok(json) = serde_json::to_string_pretty(resultado) {
        println!("{}", json);
    }
}

fn imprimir_error(error: &CubiError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
