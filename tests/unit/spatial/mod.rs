mod crop;
