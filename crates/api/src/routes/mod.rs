pub mod torneio;
