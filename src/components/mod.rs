pub mod causal_network;
