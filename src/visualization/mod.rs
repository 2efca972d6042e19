pub mod ropesim_vis2d;
