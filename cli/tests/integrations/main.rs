mod replay;
mod run;
